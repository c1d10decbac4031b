// Example: a file-tree table with a resizable name column.
use vlist::{Column, RowEventKind, Size, TreeNode, WindowOptions};
use vlist_adapter::{TableOptions, TreeTableController};

#[derive(Debug)]
struct Entry {
    path: String,
    size: u64,
}

fn dir(path: &str, children: Vec<TreeNode<Entry>>) -> TreeNode<Entry> {
    TreeNode::with_children(
        Entry {
            path: path.to_string(),
            size: 0,
        },
        children,
    )
}

fn file(path: &str, size: u64) -> TreeNode<Entry> {
    TreeNode::leaf(Entry {
        path: path.to_string(),
        size,
    })
}

fn main() {
    let roots = vec![
        dir(
            "src",
            vec![
                file("src/lib.rs", 1_200),
                dir("src/bin", vec![file("src/bin/main.rs", 300)]),
            ],
        ),
        file("Cargo.toml", 400),
    ];

    let mut t = TreeTableController::new(
        WindowOptions::new(18.0).with_row_style_cycle(2),
        vec![
            Column::new("path", 240.0).with_title("Path"),
            Column::new("size", 80.0).with_title("Size").with_min_width(40.0),
        ],
        TableOptions::new().with_get_row_class(Some(|e: &Entry, _: usize| {
            if e.size == 0 { "dir".to_string() } else { "file".to_string() }
        })),
        |e: &Entry| e.path.clone(),
    );
    t.on_resize(Size::new(400.0, 90.0), Size::new(400.0, 90.0));
    t.sync(&roots);
    t.expand_all(&roots);
    if t.needs_remeasure() {
        t.on_resize(Size::new(400.0, 90.0), Size::new(383.0, 90.0));
    }

    for row in t.visible_rows(&roots) {
        println!(
            "{:>2} {:indent$}{} [{}] {}",
            row.index,
            "",
            row.data.path,
            row.class,
            row.data.size,
            indent = row.indent as usize / 6,
        );
    }

    if let Some(ev) = t.row_event(&roots, 2, RowEventKind::Click) {
        println!("{} on {} (row {})", ev.kind.name(), ev.item.path, ev.index);
    }

    let session = t.begin_column_drag(0, 240.0);
    if let Some(session) = session {
        t.drag_column(&session, 320.0);
        t.end_column_drag(session);
    }
    println!(
        "widths={:?} content_width={} remeasure={}",
        t.columns().widths().collect::<Vec<_>>(),
        t.window().content_width(),
        t.needs_remeasure()
    );
}
