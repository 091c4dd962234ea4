use gridkit::column::{
    Alignment, ColumnClass, ColumnKind, ColumnLayout, ColumnSpec, FixedSide, Intent,
    SELECTION_COLUMN_KEY, Semantic,
};
use gridkit::render::GroupTracks;

fn widths(layout: &ColumnLayout) -> Vec<f64> {
    layout.iter().map(|c| c.width).collect()
}

fn track_widths(layout: &ColumnLayout) -> Vec<f64> {
    layout.iter().map(|c| c.track_width()).collect()
}

// ============================================================================
// Width resolution
// ============================================================================

#[test]
fn test_min_width_and_flex() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("a", "A").min_width(50.0),
            ColumnSpec::new("b", "B").flex(2.0),
        ],
        false,
    );
    assert_eq!(track_widths(&layout), vec![96.0, 320.0]);
    // Reported width stays faithful to the declaration.
    assert_eq!(widths(&layout), vec![50.0, 320.0]);
}

#[test]
fn test_width_precedence() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("explicit", "")
                .width(200)
                .min_width(300.0)
                .flex(3.0),
            ColumnSpec::new("px", "").width("180px").min_width(300.0),
            ColumnSpec::new("min", "").min_width(250.0).max_width(400.0),
            ColumnSpec::new("max", "").max_width(140.0).flex(4.0),
            ColumnSpec::new("flex", "").flex(1.5),
            ColumnSpec::new("default", ""),
        ],
        false,
    );
    assert_eq!(
        widths(&layout),
        vec![200.0, 180.0, 250.0, 140.0, 240.0, 160.0]
    );
}

#[test]
fn test_unresolvable_width_falls_through() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("pct", "").width("25%").min_width(120.0),
            ColumnSpec::new("auto", "").width("auto"),
        ],
        false,
    );
    assert_eq!(widths(&layout), vec![120.0, 160.0]);
}

#[test]
fn test_track_floor() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("tiny", "").width(10),
            ColumnSpec::new("zero", "").width(0),
            ColumnSpec::new("wide", "").width(500),
        ],
        false,
    );
    assert_eq!(track_widths(&layout), vec![96.0, 96.0, 500.0]);
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn test_alignment_precedence() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("actions", "")
                .intent(Intent::Actions)
                .align(Alignment::Left),
            ColumnSpec::new("explicit", "")
                .semantic(Semantic::Currency)
                .align(Alignment::Left),
            ColumnSpec::new("number", "").semantic(Semantic::Number),
            ColumnSpec::new("integer", "").semantic(Semantic::Integer),
            ColumnSpec::new("percent", "").semantic(Semantic::Percent),
            ColumnSpec::new("date", "").semantic(Semantic::Date),
            ColumnSpec::new("datetime", "").semantic(Semantic::Datetime),
            ColumnSpec::new("text", "").semantic(Semantic::Text),
            ColumnSpec::new("plain", ""),
        ],
        false,
    );
    let aligns: Vec<_> = layout.iter().map(|c| c.align).collect();
    assert_eq!(
        aligns,
        vec![
            Alignment::Center,
            Alignment::Left,
            Alignment::Right,
            Alignment::Right,
            Alignment::Right,
            Alignment::Center,
            Alignment::Center,
            Alignment::Left,
            Alignment::Left,
        ]
    );
}

#[test]
fn test_class_flags() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("cost", "")
                .semantic(Semantic::Currency)
                .fixed(FixedSide::Right),
            ColumnSpec::new("when", "")
                .semantic(Semantic::Time)
                .intent(Intent::Meta),
        ],
        false,
    );
    let cost = layout.find("cost").unwrap();
    assert!(cost.class.contains(ColumnClass::NUMERIC | ColumnClass::FIXED_RIGHT));
    assert!(cost.class.contains(ColumnClass::ALIGN_RIGHT));
    assert!(!cost.class.contains(ColumnClass::TEMPORAL));

    let when = layout.find("when").unwrap();
    assert!(when.class.contains(ColumnClass::TEMPORAL | ColumnClass::META));
    assert_eq!(
        when.class.class_names(),
        vec!["temporal", "meta", "align-center"]
    );
}

// ============================================================================
// Partitioning
// ============================================================================

#[test]
fn test_partition_preserves_order() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("c1", ""),
            ColumnSpec::new("r1", "").fixed(FixedSide::Right),
            ColumnSpec::new("l1", "").fixed(FixedSide::Left),
            ColumnSpec::new("c2", ""),
            ColumnSpec::new("l2", "").fixed(FixedSide::Left),
            ColumnSpec::new("r2", "").fixed(FixedSide::Right),
        ],
        false,
    );
    let keys = |group: &[gridkit::ColumnMeta]| group.iter().map(|c| c.key().to_string()).collect::<Vec<_>>();
    assert_eq!(keys(&layout.left), vec!["l1", "l2"]);
    assert_eq!(keys(&layout.center), vec!["c1", "c2"]);
    assert_eq!(keys(&layout.right), vec!["r1", "r2"]);
}

#[test]
fn test_hidden_columns_dropped() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("shown", ""),
            ColumnSpec::new("hidden", "").hidden().fixed(FixedSide::Left),
        ],
        false,
    );
    assert_eq!(layout.len(), 1);
    assert!(layout.find("hidden").is_none());
    assert!(!layout.has_left());
}

#[test]
fn test_selection_column_prefixes_left_group() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("id", "").fixed(FixedSide::Left),
            ColumnSpec::new("name", ""),
        ],
        true,
    );
    assert_eq!(layout.left.len(), 2);
    let selection = &layout.left[0];
    assert_eq!(selection.key(), SELECTION_COLUMN_KEY);
    assert_eq!(selection.kind, ColumnKind::Selection);
    assert!(selection.track_width() >= 44.0);
    assert!(selection.track_width() < 96.0);
    assert_eq!(layout.left[1].key(), "id");
}

#[test]
fn test_selection_only_left_group() {
    let layout = ColumnLayout::resolve(&[ColumnSpec::new("name", "")], true);
    assert!(layout.has_left());
    assert!(layout.left[0].is_selection());
}

// ============================================================================
// Tracks
// ============================================================================

#[test]
fn test_group_tracks_template() {
    let layout = ColumnLayout::resolve(
        &[
            ColumnSpec::new("a", "").min_width(50.0),
            ColumnSpec::new("b", "").flex(2.0),
            ColumnSpec::new("c", "").width(120).fixed(FixedSide::Right),
        ],
        true,
    );
    let tracks = GroupTracks::new(&layout, 400.0);
    assert_eq!(tracks.left.template(), "44px");
    assert_eq!(tracks.center.template(), "96px 320px");
    assert_eq!(tracks.right.template(), "120px");
    assert_eq!(tracks.center.offsets(), vec![0.0, 96.0]);
    assert_eq!(tracks.content_width, 44.0 + 96.0 + 320.0 + 120.0);
}

#[test]
fn test_content_width_floors() {
    let layout = ColumnLayout::resolve(&[ColumnSpec::new("a", "").width(100)], false);
    assert_eq!(GroupTracks::new(&layout, 0.0).content_width, 320.0);
    assert_eq!(GroupTracks::new(&layout, 900.0).content_width, 900.0);
    assert_eq!(GroupTracks::new(&ColumnLayout::default(), 0.0).content_width, 320.0);
}
