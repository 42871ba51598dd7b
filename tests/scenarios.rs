// tests/scenarios.rs
use log::Level;
use toy_robot::{CommandInterpreter, Grid, MemorySink, Orientation, Pose, SimulatorConfig};

fn setup() -> CommandInterpreter<MemorySink> {
    let _ = env_logger::builder().is_test(true).try_init();
    CommandInterpreter::with_sink(SimulatorConfig::default(), MemorySink::new()).unwrap()
}

/// Runs every line and collects the reports in order.
fn run(interpreter: &mut CommandInterpreter<MemorySink>, script: &[&str]) -> Vec<String> {
    script
        .iter()
        .filter_map(|line| interpreter.execute(line).output)
        .collect()
}

#[test]
fn move_north_from_origin() {
    let mut robot = setup();
    let reports = run(&mut robot, &["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
    assert_eq!(reports, ["0,1,NORTH"]);
}

#[test]
fn turn_left_at_origin() {
    let mut robot = setup();
    let reports = run(&mut robot, &["PLACE 0,0,NORTH", "LEFT", "REPORT"]);
    assert_eq!(reports, ["0,0,WEST"]);
}

#[test]
fn mixed_walk() {
    let mut robot = setup();
    let reports = run(
        &mut robot,
        &["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"],
    );
    assert_eq!(reports, ["3,3,NORTH"]);
}

#[test]
fn move_off_the_south_edge_is_refused() {
    let mut robot = setup();
    let reports = run(&mut robot, &["PLACE 0,0,SOUTH", "MOVE", "REPORT"]);
    assert_eq!(reports, ["0,0,SOUTH"]);
    assert!(robot.sink().is_empty(), "a refused move is not a diagnostic");
}

#[test]
fn off_table_place_is_ignored() {
    let mut robot = setup();
    let reports = run(&mut robot, &["PLACE 6,6,NORTH", "REPORT"]);
    assert!(reports.is_empty());
    assert!(!robot.state().is_placed());
    assert_eq!(robot.sink().count(Level::Warn), 1);
}

#[test]
fn second_place_resets_the_pose() {
    let mut robot = setup();
    let reports = run(&mut robot, &["PLACE 1,2,SOUTH", "PLACE 0,0,NORTH", "REPORT"]);
    assert_eq!(reports, ["0,0,NORTH"]);
}

#[test]
fn commands_before_place_are_silent() {
    let mut robot = setup();
    let reports = run(
        &mut robot,
        &["MOVE", "LEFT", "RIGHT", "REPORT", "PLACE 2,2,WEST", "REPORT"],
    );
    assert_eq!(reports, ["2,2,WEST"]);
}

#[test]
fn language_is_case_insensitive() {
    let mut robot = setup();
    let reports = run(&mut robot, &["place 2,3,west", "Move", "right", "report"]);
    assert_eq!(reports, ["1,3,NORTH"]);
}

#[test]
fn bad_lines_do_not_disturb_the_session() {
    let mut robot = setup();
    let reports = run(
        &mut robot,
        &[
            "PLACE 1,1,NORTH",
            "PLACE 2,2,NORTHEAST",
            "PLACE two,2,EAST",
            "PLACE 3,3",
            "FLY",
            "",
            "MOVE",
            "REPORT",
        ],
    );
    assert_eq!(reports, ["1,2,NORTH"]);

    let sink = robot.sink();
    assert_eq!(sink.count(Level::Error), 2);
    assert_eq!(sink.count(Level::Warn), 2);
}

#[test]
fn non_square_table_uses_each_axis() {
    let mut robot = CommandInterpreter::from_grid(Grid::new(3, 7).unwrap(), MemorySink::new());
    assert!(!robot.execute("PLACE 5,1,EAST").accepted);
    assert!(robot.execute("PLACE 1,5,NORTH").accepted);

    let reports = run(
        &mut robot,
        &["MOVE", "MOVE", "MOVE", "RIGHT", "MOVE", "MOVE", "MOVE", "REPORT"],
    );
    assert_eq!(reports, ["2,6,EAST"]);
    assert_eq!(
        robot.state().pose(),
        Some(Pose::new(2, 6, Orientation::East))
    );
}

#[test]
fn run_streams_reports_to_output() {
    let mut robot = setup();
    let script = "PLACE 0,0,EAST\nREPORT\nMOVE\nREPORT\nLEFT\nMOVE\nREPORT\n";
    let mut out = Vec::new();
    let summary = robot.run(script.as_bytes(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0,0,EAST\n1,0,EAST\n1,1,NORTH\n"
    );
    assert_eq!(summary.reports, 3);
    assert_eq!(summary.rejected, 0);
}

#[test]
fn final_state_serializes_to_json() {
    let mut robot = setup();
    robot.execute("PLACE 3,4,SOUTH");
    let json = serde_json::to_value(robot.state()).unwrap();
    assert_eq!(json["Placed"]["orientation"], "SOUTH");
    assert_eq!(json["Placed"]["position"], serde_json::json!([3, 4]));
}
