use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("scaffold")
                .about("Create the blog stylesheet skeleton under a base path")
                .arg(
                    Arg::new("base")
                        .help("Directory under which the skeleton is created; prompted for when omitted"),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Render a directory tree to a text report, honoring exclusions")
                .arg(Arg::new("root").help("Directory to walk").required(true))
                .arg(
                    Arg::new("exclude")
                        .help("Subtree path to skip entirely (repeatable)")
                        .short('e')
                        .long("exclude")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("output")
                        .help("Report file to write")
                        .short('o')
                        .long("output")
                        .default_value(blogforge::tree::DEFAULT_REPORT_FILE),
                ),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("scaffold", args)) => handle_scaffold(args),
        Some(("tree", args)) => handle_tree(args),
        _ => unreachable!(),
    }
}

fn init_logging(is_verbose: bool) {
    let default_filter = if is_verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn handle_scaffold(args: &ArgMatches) -> miette::Result<()> {
    let base = args.get_one::<String>("base").map(String::as_str);

    blogforge::api::scaffold_styles(base)?;

    Ok(())
}

fn handle_tree(args: &ArgMatches) -> miette::Result<()> {
    let root = args.get_one::<String>("root").expect("root required");
    let output = args.get_one::<String>("output").expect("output has a default");

    let exclude: Vec<String> = args
        .get_many::<String>("exclude")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    blogforge::api::render_tree(root, &exclude, output)?;

    Ok(())
}
