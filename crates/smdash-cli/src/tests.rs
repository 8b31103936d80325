use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["smdash"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(cli.data.is_none());
    assert!(cli.filters.platforms.is_none());
}

#[test]
fn parses_summary_command() {
    let cli = Cli::try_parse_from(["smdash", "summary"]).expect("expected valid cli args");
    assert_eq!(cli.command, Some(Commands::Summary));
    assert_eq!(Commands::Summary.view(), Some(View::Summary));
}

#[test]
fn parses_repl_command() {
    let cli = Cli::try_parse_from(["smdash", "repl"]).expect("expected valid cli args");
    assert_eq!(cli.command, Some(Commands::Repl));
    assert_eq!(Commands::Repl.view(), None);
}

#[test]
fn parses_json_format() {
    let cli =
        Cli::try_parse_from(["smdash", "--format", "json"]).expect("expected valid cli args");
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn rejects_unknown_format() {
    assert!(Cli::try_parse_from(["smdash", "--format", "pdf"]).is_err());
}

#[test]
fn platform_flag_is_repeatable_and_comma_separated() {
    let cli = Cli::try_parse_from([
        "smdash",
        "--platform",
        "Instagram,TikTok",
        "--platform",
        "YouTube",
    ])
    .expect("expected valid cli args");
    assert_eq!(
        cli.filters.platforms,
        Some(vec![
            "Instagram".to_string(),
            "TikTok".to_string(),
            "YouTube".to_string()
        ])
    );
}

#[test]
fn year_flag_splits_on_commas() {
    let cli =
        Cli::try_parse_from(["smdash", "--year", "2023,2024"]).expect("expected valid cli args");
    assert_eq!(
        cli.filters.years,
        Some(vec!["2023".to_string(), "2024".to_string()])
    );
}

#[test]
fn global_flags_follow_the_subcommand() {
    let cli = Cli::try_parse_from([
        "smdash",
        "campaigns",
        "--content-type",
        "Reel",
        "--format",
        "markdown",
        "--data",
        "posts.csv",
    ])
    .expect("expected valid cli args");
    assert_eq!(cli.command, Some(Commands::Campaigns));
    assert_eq!(cli.format, OutputFormat::Markdown);
    assert_eq!(cli.data, Some(PathBuf::from("posts.csv")));
    assert_eq!(cli.filters.content_types, Some(vec!["Reel".to_string()]));
}

#[test]
fn every_view_command_maps_to_a_view() {
    for (command, view) in [
        (Commands::Dashboard, View::All),
        (Commands::Engagement, View::Engagement),
        (Commands::Content, View::Content),
        (Commands::Campaigns, View::Campaigns),
        (Commands::Timing, View::Timing),
    ] {
        assert_eq!(command.view(), Some(view));
    }
}
