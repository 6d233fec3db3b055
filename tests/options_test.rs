use dom_distiller::{distill, distill_with_options, DebugLevel, DistillerOptions, Error};

const ARTICLE: &str = r#"
    <html><body>
        <nav><a href="/">Home</a> <a href="/news">News</a></nav>
        <article>
            <p>ARTICLE_MARKER opens a paragraph that has more than enough words to be kept.</p>
            <p>Short line.</p>
        </article>
    </body></html>
"#;

#[test]
fn options_default_values_are_sensible() {
    let options = DistillerOptions::default();
    assert_eq!(options.debug_level, DebugLevel::None);
    assert!(!options.extract_text_only);
    assert_eq!(options.min_block_words, 10);
    assert!((options.max_link_density - 0.33).abs() < f64::EPSILON);
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = DistillerOptions {
        debug_level: DebugLevel::Visibility,
        ..DistillerOptions::default()
    };

    assert_eq!(options.debug_level, DebugLevel::Visibility);
    assert!(!options.extract_text_only);
    assert_eq!(options.min_block_words, 10);
}

#[test]
fn lower_word_threshold_keeps_short_blocks() {
    let default = distill(ARTICLE).expect("distillation failed");
    assert!(default.distilled_content.html.contains("ARTICLE_MARKER"));
    assert!(!default.distilled_content.html.contains("Short line"));

    let lenient = DistillerOptions {
        min_block_words: 2,
        ..DistillerOptions::default()
    };
    let result = distill_with_options(ARTICLE, &lenient).expect("distillation failed");
    assert!(result.distilled_content.html.contains("Short line"));
}

#[test]
fn debug_log_empty_by_default_and_filled_on_request() {
    let quiet = distill(ARTICLE).expect("distillation failed");
    assert!(quiet.debug_info.log.is_empty());

    let phases = DistillerOptions {
        debug_level: DebugLevel::Phases,
        ..DistillerOptions::default()
    };
    let result = distill_with_options(ARTICLE, &phases).expect("distillation failed");
    assert!(result.debug_info.log.contains("relevant nodes"));
    // Timing lines need the highest level.
    assert!(!result.debug_info.log.contains("timing:"));
}

#[test]
fn out_of_range_link_density_is_rejected() {
    let options = DistillerOptions {
        max_link_density: 1.01,
        ..DistillerOptions::default()
    };

    let err = distill_with_options(ARTICLE, &options).expect_err("invalid option accepted");
    assert!(matches!(err, Error::InvalidOption(_)));
    assert!(err.to_string().contains("max_link_density"));
}
