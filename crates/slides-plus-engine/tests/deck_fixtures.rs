use pretty_assertions::assert_eq;
use rstest::rstest;
use slides_plus_engine::{
    Background, Deck, DeckConfig, Layout, Transition, is_slides_file, parse_deck,
    slide_boundaries, slide_index_at_line, split_slides,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn outline(deck: &Deck) -> String {
    deck.slides
        .iter()
        .map(|s| {
            format!(
                "{} {:?} {} | layout={} notes={:?}",
                s.index,
                s.lines,
                s.title().unwrap_or_default(),
                s.frontmatter.layout().as_str(),
                s.notes
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const PER_SLIDE: &str = "---\ntheme: dark\n---\n\n---\nlayout: cover\n---\n\n# First\n\n---\nlayout: two-cols\nbackground: red\n---\n\n## Left\n\n## Right";

const SAMPLES: &[&str] = &[
    "",
    "\n\n\n",
    "---",
    "---\n---",
    "# One\n---\n---\n---\n# Two\n---\n",
    "```\n---\n",
    "---\ntheme: dark\n",
    "# Slide 1\n\n---\n\n# Slide 2",
    "---\nlayout: cover\n---\n---\nkey: v\n---\n",
    "text\n---\n# heading\nkey: value\n---\nbody",
    PER_SLIDE,
];

#[test]
fn fixture_talk_outline() {
    let deck = parse_deck(&fixture("talk"));

    insta::assert_snapshot!(outline(&deck), @r#"
    0 0..11 Welcome | layout=default notes="Greet the audience"
    1 11..23 Comparison | layout=two-cols notes=""
    2 23..35 Code | layout=default notes=""
    3 35..42 Thanks | layout=default notes="Take questions"
    "#);
}

#[test]
fn fixture_talk_details() {
    let text = fixture("talk");
    let deck = parse_deck(&text);

    assert!(is_slides_file(&text));
    assert_eq!(deck.global_config.theme, "dark");
    assert_eq!(deck.global_config.transition, Transition::Fade);

    let slots = deck.slides[1].slots();
    let names: Vec<_> = slots.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["default", "left", "right"]);
    assert_eq!(slots[2].content, "After");

    let blocks = deck.slides[2].code_blocks();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].language.as_deref(), Some("rust"));
    assert_eq!(blocks[0].line_count(), 3);
    assert!(blocks[0].shows_line_numbers());
    assert_eq!(blocks[0].steps(), vec![vec![1], vec![2, 3]]);

    let last = &deck.slides[3];
    assert_eq!(last.content, "# Thanks");
    assert_eq!(last.frontmatter.class(), Some("closing"));
    assert_eq!(
        last.frontmatter.background(),
        Some(Background::Image("./end.png".to_string()))
    );
}

#[test]
fn fixture_fenced_outline() {
    let deck = parse_deck(&fixture("fenced"));

    insta::assert_snapshot!(outline(&deck), @r#"
    0 0..9 Separators in code | layout=default notes=""
    1 9..13 Heading after separator | layout=default notes=""
    "#);
    assert!(deck.slides[1].frontmatter.is_empty());
}

#[rstest]
fn cursor_ranges_agree_with_mapper(#[values("talk", "fenced")] name: &str) {
    let text = fixture(name);
    let deck = parse_deck(&text);
    let line_count = text.split('\n').count();

    for line in 0..line_count + 3 {
        assert_eq!(
            deck.slide_for_line(line).index,
            slide_index_at_line(&text, line),
            "{name} line {line}"
        );
    }
}

#[test]
fn every_input_yields_a_slide() {
    for text in SAMPLES {
        assert!(!parse_deck(text).slides.is_empty(), "{text:?}");
        assert!(!split_slides(text).is_empty(), "{text:?}");
    }
}

#[test]
fn no_frontmatter_gives_the_baseline() {
    let deck = parse_deck("# Slide\n\n---\n\n# Two");
    assert_eq!(deck.global_config, DeckConfig::default());
}

#[test]
fn slide_count_matches_mapper_boundaries() {
    for text in SAMPLES {
        let deck = parse_deck(text);
        assert_eq!(
            deck.len(),
            1 + slide_boundaries(text).len(),
            "{text:?}"
        );
    }
}

#[test]
fn ranges_tile_the_document() {
    for text in SAMPLES {
        let deck = parse_deck(text);
        let line_count = text.split('\n').count();

        assert_eq!(deck.slides[0].lines.start, 0, "{text:?}");
        assert_eq!(deck.slides[deck.len() - 1].lines.end, line_count, "{text:?}");
        for pair in deck.slides.windows(2) {
            assert_eq!(pair[0].lines.end, pair[1].lines.start, "{text:?}");
        }
        for line in 0..line_count + 2 {
            assert_eq!(
                deck.slide_for_line(line).index,
                slide_index_at_line(text, line),
                "{text:?} line {line}"
            );
        }
    }
}

#[test]
fn separators_inside_fences_do_not_split() {
    let deck = parse_deck("# One\n\n```\n---\n---\n```\n\n---\n\n# Two");
    assert_eq!(deck.len(), 2);
    assert!(deck.slides[0].content.contains("---\n---"));
}

#[test]
fn per_slide_frontmatter_is_isolated() {
    let deck = parse_deck(PER_SLIDE);

    assert_eq!(deck.global_config.theme, "dark");
    assert_eq!(deck.len(), 3);
    assert!(!deck.slides[0].frontmatter.contains_key("layout"));
    assert_eq!(deck.slides[1].frontmatter.layout(), Layout::Cover);
    assert_eq!(deck.slides[1].content, "# First");
    assert_eq!(deck.slides[2].frontmatter.len(), 2);
    assert_eq!(deck.slides[2].frontmatter.get_str("layout"), Some("two-cols"));
    assert_eq!(deck.slides[2].frontmatter.get_str("background"), Some("red"));
}

#[test]
fn notes_are_collected_from_a_slide() {
    let deck = parse_deck("# Slide\n\n<!-- Note 1 -->\n\n<!-- Note 2 -->");
    assert_eq!(deck.len(), 1);
    assert!(deck.slides[0].notes.contains("Note 1"));
    assert!(deck.slides[0].notes.contains("Note 2"));
    assert!(!deck.slides[0].content.contains("<!--"));
}

#[test]
fn cursor_on_a_separator_stays_on_the_previous_slide() {
    let text = "# Slide 1\n\n---\n\n# Slide 2";
    assert_eq!(slide_index_at_line(text, 2), 0);
    assert_eq!(slide_index_at_line(text, 4), 1);
}

#[rstest]
#[case::crlf("---\r\ntheme: dark\r\n---\r\n# One\r\n---\r\n# Two\r\n")]
#[case::bom("\u{feff}---\ntheme: dark\n---\n# One\n---\n# Two\n")]
#[case::both("\u{feff}---\r\ntheme: dark\r\n---\r\n# One\r\n---\r\n# Two\r\n")]
fn line_endings_and_bom_do_not_change_the_deck(#[case] text: &str) {
    let plain = parse_deck("---\ntheme: dark\n---\n# One\n---\n# Two\n");
    let deck = parse_deck(text);
    assert_eq!(deck.len(), plain.len());
    assert_eq!(deck.global_config, plain.global_config);
    assert_eq!(deck.slides[1].content, "# Two");
    assert_eq!(slide_index_at_line(text, 5), 1);
}
