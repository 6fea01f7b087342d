use collab_finder::graph::build_graph_and_journals;
use collab_finder::recommend::{recommend, resolve_target, RecommendParams};
use collab_finder::{run, CollabError, ColumnConfig, IngestConfig, RunConfig, TargetMatch};
use std::io::Write;
use tempfile::NamedTempFile;

fn dataset(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const TRIANGLE: &str = "authors,mdate,journal\n\
                        Alice;Bob,2020-01-01,V1\n\
                        Bob;Carol,2020-06-01,V1\n\
                        Alice;Carol,2021-02-03,V1\n";

#[test]
fn test_triangle_has_no_new_collaborators() {
    let file = dataset(TRIANGLE);
    let graph = build_graph_and_journals(file.path(), &ColumnConfig::default(), Some(2021), &IngestConfig::default())
        .unwrap();

    let target = resolve_target(graph.adjacency(), "Alice").unwrap();
    let recs = recommend(graph.adjacency(), graph.venues(), &target, &RecommendParams::default());
    assert!(recs.is_empty());
}

#[test]
fn test_triangle_with_far_neighbors() {
    let file = dataset(TRIANGLE);
    let graph = build_graph_and_journals(file.path(), &ColumnConfig::default(), Some(2021), &IngestConfig::default())
        .unwrap();

    let params = RecommendParams {
        include_far_neighbors: true,
        ..RecommendParams::default()
    };
    let recs = recommend(graph.adjacency(), graph.venues(), "Alice", &params);

    let names: Vec<&str> = recs.iter().map(|r| r.candidate.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Carol"]);
    for rec in &recs {
        assert_eq!(rec.journal_jaccard, 1.0);
        // each pair in a triangle shares the third author
        assert_eq!(rec.common_neighbor_count, 1);
        assert_eq!(rec.common_journals, vec!["V1"]);
    }
}

#[test]
fn test_run_reports_summary() {
    let body = "authors,mdate,journal\n\
                Alice;Bob,2019,V1\n\
                Bob;Dave,2019,V1\n\
                Bob;Erin,2019,V2\n\
                Dave;Erin,2019,V2\n\
                Alice;Dave,2023,V1\n";
    let file = dataset(body);

    let mut config = RunConfig::new(file.path(), "alice");
    config.split_year = Some("2020".to_string());
    let report = run(&config).unwrap();

    assert_eq!(report.split_year, Some(2020));
    assert_eq!(report.statistics.rows_used, 4);
    assert_eq!(report.statistics.node_count, 4);
    assert_eq!(report.statistics.edge_count, 4);
    assert_eq!(report.target, "Alice");
    assert_eq!(report.target_match, TargetMatch::CaseInsensitive);

    // Dave shares V1, Erin shares nothing with Alice
    let names: Vec<&str> = report.recommendations.iter().map(|r| r.candidate.as_str()).collect();
    assert_eq!(names, vec!["Dave"]);
}

#[test]
fn test_run_derives_split_year() {
    let mut body = String::from("authors,mdate,journal\n");
    for i in 0..8 {
        body.push_str(&format!("A{};B{},2018,J\n", i, i));
    }
    body.push_str("A0;Z,2024,J\nA1;Z,2024,J\n");
    let file = dataset(&body);

    let config = RunConfig::new(file.path(), "A0");
    let report = run(&config).unwrap();
    assert_eq!(report.split_year, Some(2018));
    assert_eq!(report.statistics.rows_used, 8);
}

#[test]
fn test_run_rejects_bad_split_year() {
    let file = dataset(TRIANGLE);
    let mut config = RunConfig::new(file.path(), "Alice");
    config.split_year = Some("twenty".to_string());

    assert!(matches!(run(&config), Err(CollabError::InvalidSplitYear(_))));
}

#[test]
fn test_run_missing_dataset() {
    let config = RunConfig::new("/no/such/dir/data.csv", "Alice");
    assert!(matches!(run(&config), Err(CollabError::DatasetNotFound(_))));
}

#[test]
fn test_run_missing_authors_column() {
    let file = dataset("writers,mdate,journal\nAlice;Bob,2020,V1\n");
    let config = RunConfig::new(file.path(), "Alice");

    match run(&config) {
        Err(CollabError::MissingColumn { column }) => assert_eq!(column, "authors"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_run_single_author_rows_give_empty_graph() {
    let file = dataset("authors,mdate,journal\nAlice,2020,V1\nBob,2020,V1\n");
    let config = RunConfig::new(file.path(), "Alice");
    assert!(matches!(run(&config), Err(CollabError::EmptyGraph)));
}

#[test]
fn test_row_cap_stops_at_first_batch_boundary() {
    let mut body = String::from("authors,mdate,journal\n");
    for i in 0..1000 {
        body.push_str(&format!("A{};B{},2020,J\n", i, i));
    }
    let file = dataset(&body);
    let ingest = IngestConfig {
        batch_size: 20,
        max_rows: 10,
    };

    let graph = build_graph_and_journals(file.path(), &ColumnConfig::default(), None, &ingest).unwrap();
    assert_eq!(graph.rows_used(), 20);
}

#[test]
fn test_custom_columns_and_filter() {
    let body = "names,year,venue\n\
                T;M,2020,Alpha\n\
                M;C1,2020,Alpha\n\
                M;C2,2020,Beta\n\
                T;X,2020,Beta\n";
    let file = dataset(body);

    let mut config = RunConfig::new(file.path(), "T");
    config.columns = ColumnConfig {
        authors: "names".to_string(),
        year: "year".to_string(),
        venue: "venue".to_string(),
    };
    config.journal_filter = Some("beta".to_string());

    let report = run(&config).unwrap();
    let names: Vec<&str> = report.recommendations.iter().map(|r| r.candidate.as_str()).collect();
    assert_eq!(names, vec!["C2"]);
}

#[test]
fn test_report_serializes_to_json() {
    let file = dataset(TRIANGLE);
    let mut config = RunConfig::new(file.path(), "Alice");
    config.include_far_neighbors = true;
    config.split_year = Some("2021".to_string());

    let report = run(&config).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["target"], "Alice");
    assert_eq!(json["target_match"], "exact");
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 2);
}
