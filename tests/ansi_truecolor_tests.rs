use powerline_status::*;

fn git_text() -> StyledText {
    let mut cells = Cells::new();
    let style = Style::new(Color::Rgb(0, 0, 0), Color::Rgb(0, 255, 0)).with(Attribute::Bold);
    cells
        .register(SegmentId::new(Group::Git, Part::Text), "main", style)
        .unwrap();
    cells.render_all()
}

// Kept alone in its own test binary: it mutates the process environment.
#[test]
fn test_ansi_formatter_color_depth_follows_colorterm() {
    colored::control::set_override(true);
    let text = git_text();

    std::env::set_var("COLORTERM", "truecolor");
    let truecolor = AnsiFormatter.format(&text);
    assert!(truecolor.contains("38;2;0;0;0"));
    assert!(truecolor.contains("48;2;0;255;0"));
    assert!(truecolor.contains("main"));

    // hex colors fall back to the nearest of the 16 ANSI colors
    std::env::remove_var("COLORTERM");
    let downgraded = AnsiFormatter.format(&text);
    assert!(!downgraded.contains("38;2;"));
    assert!(!downgraded.contains("48;2;"));
    assert!(downgraded.contains("main"));
    assert!(downgraded.starts_with("\x1b[1;"));
}
