use async_trait::async_trait;
use clap::Parser;
use everything_cli::{
    AutocompleteArgs, Cli, Command, NormalizeArgs, autocomplete, normalize, parse_envelope,
};
use everything_model::{Kind, LinkImage, LinkPreview, LinkPreviewSource, PreviewError};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

struct FixedSource;

#[async_trait]
impl LinkPreviewSource for FixedSource {
    async fn fetch_link_preview(&self, _url: &str) -> Result<LinkPreview, PreviewError> {
        Ok(LinkPreview {
            title: Some("Fetched".into()),
            images: vec![LinkImage {
                url: "https://cdn.test/x.png".into(),
                width: None,
                height: None,
            }],
        })
    }
}

fn args(kind: Kind) -> NormalizeArgs {
    NormalizeArgs {
        kind: Some(kind),
        ..Default::default()
    }
}

fn run(input: &str, args: &NormalizeArgs) -> Value {
    let output = tokio_test::block_on(normalize(input, args, None)).unwrap();
    serde_json::from_str(&output).unwrap()
}

// ── Argument parsing ────────────────────────────────────────────

#[test]
fn parses_normalize_flags() {
    let cli = Cli::try_parse_from([
        "everything",
        "normalize",
        "--kind",
        "t3",
        "--render-html",
        "--pretty",
        "-v",
    ])
    .unwrap();

    assert!(cli.verbose);
    let Command::Normalize(args) = cli.command else {
        panic!("expected normalize");
    };
    assert_eq!(args.kind, Some(Kind::Post));
    assert!(args.render_html);
    assert!(args.pretty);
    assert_eq!(args.timeout, 10);
    assert_eq!(args.preview_config().timeout_secs, 10);
}

#[test]
fn rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["everything", "normalize", "--kind", "t9"]).is_err());
}

#[test]
fn render_directions_conflict() {
    let result = Cli::try_parse_from([
        "everything",
        "normalize",
        "--kind",
        "t1",
        "--render-html",
        "--render-markdown",
    ]);
    assert!(result.is_err());
}

#[test]
fn no_tables_maps_to_markdown_options() {
    let args = NormalizeArgs {
        no_tables: true,
        ..Default::default()
    };
    let options = args.markdown_options();
    assert!(!options.tables);
    assert!(options.strikethrough);
}

// ── normalize ───────────────────────────────────────────────────

#[test]
fn normalizes_bare_data() {
    let output = run(r#"{"title": "hi"}"#, &args(Kind::Post));
    assert_eq!(output["kind"], "t3");
    assert_eq!(output["data"]["title"], "hi");
    assert_eq!(output["data"]["whitelist_status"], "all_ads");
}

#[test]
fn normalizes_full_envelope() {
    let args = NormalizeArgs {
        envelope: true,
        ..Default::default()
    };
    let output = run(r#"{"kind": "t5", "data": {"display_name": "rust"}}"#, &args);
    assert_eq!(output["kind"], "t5");
    assert_eq!(output["data"]["display_name"], "rust");
}

#[test]
fn envelope_kind_must_match_flag() {
    let args = NormalizeArgs {
        kind: Some(Kind::User),
        envelope: true,
        ..Default::default()
    };
    let err = parse_envelope(r#"{"kind": "t5", "data": {}}"#, &args).unwrap_err();
    assert!(err.to_string().contains("does not match"));
}

#[test]
fn bare_data_needs_a_kind() {
    let err = parse_envelope("{}", &NormalizeArgs::default()).unwrap_err();
    assert!(err.to_string().contains("--kind is required"));
}

#[test]
fn invalid_json_is_reported() {
    let err = parse_envelope("{not json", &args(Kind::Post)).unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
}

#[test]
fn renders_markdown_to_html() {
    let args = NormalizeArgs {
        render_html: true,
        ..args(Kind::Comment)
    };
    let output = run(r#"{"body": "*hi*"}"#, &args);
    assert_eq!(output["data"]["body_html"], "<p><em>hi</em></p>\n");
}

#[test]
fn renders_html_to_markdown() {
    let args = NormalizeArgs {
        render_markdown: true,
        ..args(Kind::Post)
    };
    let output = run(r#"{"selftext_html": "<p><strong>yo</strong></p>"}"#, &args);
    assert_eq!(output["data"]["selftext"], "**yo**");
}

#[test]
fn enriches_link_posts() {
    let input = r#"{"url": "https://example.test"}"#;
    let output =
        tokio_test::block_on(normalize(input, &args(Kind::Post), Some(&FixedSource))).unwrap();
    let output: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(output["data"]["title"], "Fetched");
    assert_eq!(output["data"]["thumbnail"], "https://cdn.test/x.png");
    assert_eq!(output["data"]["preview"]["enabled"], true);
}

#[test]
fn enrichment_skips_other_kinds() {
    let output = tokio_test::block_on(normalize(
        r#"{"display_name": "rust"}"#,
        &args(Kind::Group),
        Some(&FixedSource),
    ))
    .unwrap();
    let output: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(output["data"]["title"], "");
}

#[test]
fn pretty_output_is_multiline() {
    let args = NormalizeArgs {
        pretty: true,
        ..args(Kind::MoreComments)
    };
    let output = tokio_test::block_on(normalize("{}", &args, None)).unwrap();
    assert!(output.contains('\n'));
}

// ── autocomplete ────────────────────────────────────────────────

#[test]
fn autocomplete_prints_view() {
    let input = json!({
        "kind": "Listing",
        "data": {"children": [
            {"kind": "t5", "data": {"display_name": "rust", "allow_videos": true}},
            {"kind": "t3", "data": {}},
        ]},
    })
    .to_string();
    let output = autocomplete(&input, &AutocompleteArgs::default()).unwrap();
    let output: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(output["subreddits"].as_array().unwrap().len(), 1);
    assert_eq!(output["subreddits"][0]["name"], "rust");
    assert_eq!(output["subreddits"][0]["allowedPostTypes"]["videos"], true);
}

#[test]
fn autocomplete_rejects_non_listing() {
    let input = r#"{"kind": "t3", "data": {}}"#;
    assert!(autocomplete(input, &AutocompleteArgs::default()).is_err());
}
