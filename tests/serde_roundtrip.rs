use weft::graph::algorithms::{ComponentLabeling, TopologicalDirection, TraversalOrder};
use weft::graph::AdjacencyGraph;
use weft::{strongly_connected_components, ErrorKind, RankedPathOptions};

#[test]
fn ranked_options_fill_missing_fields() -> anyhow::Result<()> {
    let options: RankedPathOptions<f64> = serde_json::from_str("{}")?;
    assert_eq!(options, RankedPathOptions::default());

    let options: RankedPathOptions<u32> = serde_json::from_str(r#"{"max_weight": 12}"#)?;
    assert_eq!(options.path_count, 3);
    assert_eq!(options.max_weight, Some(12));

    let options = RankedPathOptions::with_path_count(5).max_weight(9.5_f64);
    let back: RankedPathOptions<f64> = serde_json::from_str(&serde_json::to_string(&options)?)?;
    assert_eq!(back, options);
    Ok(())
}

#[test]
fn component_labeling_survives_json() -> anyhow::Result<()> {
    let g = AdjacencyGraph::from_edges([(1u32, 2), (2, 1), (2, 3)]);
    let labels = strongly_connected_components(&g);
    let json = serde_json::to_string(&labels)?;
    let back: ComponentLabeling<u32> = serde_json::from_str(&json)?;
    assert_eq!(back, labels);
    assert!(back.same_component(1, 2));
    Ok(())
}

#[test]
fn unit_enums_use_variant_names() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&TopologicalDirection::Backward)?, r#""Backward""#);
    assert_eq!(
        serde_json::from_str::<TraversalOrder>(r#""DepthFirst""#)?,
        TraversalOrder::DepthFirst
    );
    assert_eq!(serde_json::to_string(&ErrorKind::Precondition)?, r#""Precondition""#);
    Ok(())
}
