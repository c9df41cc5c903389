use std::path::Path;

use console::Style;
use magicgrid_core::layout::ViewportBounds;
use magicgrid_core::render::{GridSpec, OpacitySpec};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(
    input: &Path,
    output: &Path,
    grid: GridSpec,
    opacity: OpacitySpec,
    bounds: &ViewportBounds,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Magic Grid"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(10)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Layers"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Grid"),
        s.value.apply_to(grid)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Opacity"),
        s.value.apply_to(opacity)
    );
    println!();

    println!("  {}", s.header.apply_to("Bounds"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max Width"),
        s.value.apply_to(format!("{:.0} px", bounds.max_width))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max Height"),
        s.value.apply_to(format!("{:.0} px", bounds.max_height))
    );
    println!();
}
