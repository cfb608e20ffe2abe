use trace_rail::{Annotation, ChainFormatConfig, ChainFormatter, Error, Reason, Success, Traced};

fn sample() -> Traced<()> {
    Traced::fail(Error::new("sync failed").caused_by(Error::new("timeout").caused_by("dns")))
        .with_reason(Reason::new("peer eu-2").meta("region", "eu"))
        .with_success(Success::new("local commit"))
}

#[test]
fn default_display_joins_messages_with_causes() {
    assert_eq!(
        sample().to_string(),
        "failure: sync failed (caused by: timeout (caused by: dns)); peer eu-2; local commit"
    );
}

#[test]
fn empty_chain_renders_status_only() {
    assert_eq!(Traced::ok(1).to_string(), "success");
}

#[test]
fn compact_uses_pipe_separator() {
    let rendered = sample().format_with(&ChainFormatConfig::compact());
    assert_eq!(
        rendered,
        "failure: sync failed (caused by: timeout (caused by: dns)) | peer eu-2 | local commit"
    );
}

#[test]
fn messages_only_drops_causes() {
    let rendered = sample().format_with(&ChainFormatConfig::messages_only());
    assert_eq!(rendered, "failure: sync failed; peer eu-2; local commit");
}

#[test]
fn pretty_tags_kinds_and_indents_causes() {
    let rendered = format!("{:#}", sample());
    let expected = "failure:\n\
                    x sync failed\n  x timeout\n    x dns\n\
                    - peer eu-2 {region=eu}\n\
                    + local commit";
    assert_eq!(rendered, expected);
}

struct Upper;

impl ChainFormatter for Upper {
    fn format_annotation(&self, annotation: &Annotation) -> String {
        annotation.message().to_uppercase()
    }

    fn separator(&self) -> &str {
        " > "
    }
}

#[test]
fn custom_formatter_overrides_rendering() {
    let rendered = sample().format_with(&Upper);
    assert_eq!(rendered, "failure: SYNC FAILED > PEER EU-2 > LOCAL COMMIT");
}
