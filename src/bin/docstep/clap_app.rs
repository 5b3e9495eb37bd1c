use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .arg(
        arg!(-f --format <VALUE> "Output format (xml, html or plain)")
        .long_help(
            "Format used to render the document. When not specified, the format \
                    set in the configuration file ([defaults] format) is used, falling back to xml.",
        ),
    )
    .arg(
        arg!(-t --title <VALUE> "Sets the document title.")
        .long_help("Overrides the title of the document defined in the configuration file."),
    )
    .arg(
        arg!(-l --line <VALUE> ... "Adds a line to the document body.")
        .long_help(
            "Replaces the body of the document with the given lines. \
                    When specifying multiple lines, they are rendered in the same occurrence order.",
        ),
    )
    .arg(
        arg!(-c --config <FILE> "Configuration file to use.")
        .long_help(
            "Reads the configuration from the given file instead of docstep.toml \
                    inside the configuration directory ($DOCSTEP_CONFIG_DIR).",
        ),
    )
    .arg(
        arg!(-a --all "Renders the document in every format.")
        .long_help("Renders the document once per available format, separated by an empty line.")
        .conflicts_with("format")
    )
    .arg(
        arg!(--hooks "Renders using step callbacks.")
        .long_help("Builds the renderer out of step callbacks instead of the dedicated format type. The output is identical.")
    )
}
