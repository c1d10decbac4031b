// Example: a million-row list, banded in pairs, with a little overscan.
use vlist::{ScrollEvent, Size, Window, WindowOptions};

fn main() {
    let mut w = Window::new(
        WindowOptions::new(20.0)
            .with_row_style_cycle(2)
            .with_overscan(3),
    );
    w.set_on_scroll(Some(|e: ScrollEvent| println!("scrolled: {e:?}")));

    // The container has a 17px vertical scrollbar.
    w.apply_measurement(Size::new(317.0, 200.0), Size::new(300.0, 200.0));
    if w.set_item_count(1_000_000) {
        println!("scrollbar state is stale; measure again");
    }

    w.apply_scroll(0.0, 123_450.0);
    let range = w.visible_range();
    println!("content_height={}", w.content_height());
    println!("visible_range={range:?} len={}", range.len());
    println!("spacer_height={}", w.spacer_height());
    println!("scrollbars={:?}", w.state().scrollbars());

    let target = w.scroll_top_to_reveal(999_999);
    w.apply_scroll(0.0, target);
    println!("after reveal: range={:?}", w.visible_range());
}
