use icongen_core::{Error, Layout, WrittenIcon};
use std::io::{IsTerminal as _, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn write_color(text: &str, fg_color: Color) -> std::io::Result<()> {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    stdout.set_color(ColorSpec::new().set_fg(Some(fg_color)))?;
    let result = writeln!(stdout, "{}", text);
    stdout.reset().ok();
    result
}

fn write_created(out: &mut impl Write, icon: &WrittenIcon) -> std::io::Result<()> {
    writeln!(
        out,
        "Created: {} ({}x{})",
        icon.path.display(),
        icon.size,
        icon.size
    )
}

pub fn created(icon: &WrittenIcon) -> std::io::Result<()> {
    write_created(&mut std::io::stdout().lock(), icon)
}

pub fn success() -> std::io::Result<()> {
    write_color("✅ Logo conversion completed successfully!", Color::Green)?;
    writeln!(
        std::io::stdout().lock(),
        "All web icons have been generated from your logo."
    )
}

pub fn failure(layout: &Layout, err: &Error) -> std::io::Result<()> {
    if err.is_missing_source() {
        write_color("❌ Error: logo.jpg not found in assets/images/", Color::Red)?;
        writeln!(
            std::io::stdout().lock(),
            "Please make sure your logo file exists at: {}",
            layout.source().display()
        )?;
    } else {
        write_color(&format!("❌ Error converting logo: {}", err), Color::Red)?;
    }
    Ok(())
}
