//! Network file loading tests: YAML in, routed path out.

use rp_app::{compute_path, load_yaml};

const NETWORK_YAML: &str = r#"
version: 1
name: gangnam-square
stations:
  - { id: 1, name: "강남역" }
  - { id: 2, name: "양재역" }
  - { id: 3, name: "교대역" }
  - { id: 4, name: "남부터미널역" }
lines:
  - name: "신분당선"
    color: red
    surcharge: 300
    sections:
      - { up: 1, down: 2, distance: 10 }
  - name: "2호선"
    color: green
    sections:
      - { up: 3, down: 1, distance: 10 }
  - name: "3호선"
    color: orange
    surcharge: 500
    sections:
      - { up: 3, down: 2, distance: 5 }
      - { up: 3, down: 4, distance: 3 }
"#;

#[test]
fn yaml_round_trip_and_route() {
    let path = std::env::temp_dir().join("railpath-network-file-test.yaml");
    std::fs::write(&path, NETWORK_YAML).unwrap();

    let network = load_yaml(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(network.stations().len(), 4);
    assert_eq!(network.lines().len(), 3);

    // The mid-chain insert (교대→남부터미널, 3) splits 교대→양재 (5), leaving
    // 남부터미널→양재 at distance 2.
    let source = network.station(4).unwrap().clone();
    let target = network.station(1).unwrap().clone();
    let result = compute_path(network.lines(), &source, &target, 19).unwrap();

    assert_eq!(result.distance, 12);
    assert_eq!(result.fare, 1850);
    let names: Vec<&str> = result.stations.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["남부터미널역", "양재역", "강남역"]);
}

#[test]
fn invalid_yaml_is_rejected() {
    let path = std::env::temp_dir().join("railpath-network-file-bad-test.yaml");
    std::fs::write(&path, "version: 1\nname: empty\nlines:\n  - name: L\n    color: red\n    sections: []\n").unwrap();

    let err = load_yaml(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, rp_app::AppError::Validation(_)));
}
