use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["sovscope"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_analyze_with_defaults() {
    let cli = Cli::try_parse_from(["sovscope", "analyze", "--input", "round1.json"]).unwrap();
    let Some(Commands::Analyze {
        inputs,
        brands,
        format,
        strategy,
        top,
    }) = cli.command
    else {
        panic!("expected analyze command");
    };
    assert_eq!(inputs, [PathBuf::from("round1.json")]);
    assert!(brands.is_none());
    assert_eq!(format, OutputFormat::Console);
    assert!(strategy.is_none());
    assert_eq!(top, DEFAULT_TOP_POSTS);
}

#[test]
fn parses_analyze_with_repeated_inputs_and_options() {
    let cli = Cli::try_parse_from([
        "sovscope",
        "analyze",
        "--input",
        "x.json",
        "--input",
        "reddit.json",
        "--brands",
        "brands.yaml",
        "--format",
        "markdown",
        "--strategy",
        "remote",
        "--top",
        "10",
    ])
    .unwrap();
    let Some(Commands::Analyze {
        inputs,
        brands,
        format,
        strategy,
        top,
    }) = cli.command
    else {
        panic!("expected analyze command");
    };
    assert_eq!(inputs.len(), 2);
    assert_eq!(brands, Some(PathBuf::from("brands.yaml")));
    assert_eq!(format, OutputFormat::Markdown);
    assert_eq!(strategy, Some(SentimentMode::Remote));
    assert_eq!(top, 10);
}

#[test]
fn analyze_requires_input() {
    assert!(Cli::try_parse_from(["sovscope", "analyze"]).is_err());
}

#[test]
fn analyze_rejects_unknown_strategy() {
    assert!(
        Cli::try_parse_from(["sovscope", "analyze", "--input", "a.json", "--strategy", "magic"])
            .is_err()
    );
}

#[test]
fn parses_query_command() {
    let cli = Cli::try_parse_from(["sovscope", "query"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Query { brands: None })));
}
