// tests/integration/end_to_end.rs
use crate::common::{HEADER, PHONES_CSV, Workspace};

#[test]
fn casing_variants_collapse_into_one_row() {
    let ws = Workspace::new();
    ws.write("in.csv", PHONES_CSV);

    ws.grouper("in.csv", "out.csv").assert().success();

    assert_eq!(
        ws.read("out.csv"),
        format!(
            "{HEADER},count\n\
             Apple,iPhone 12,Red,64GB,Unlocked,Grade A,Working,3\n\
             Samsung,Galaxy S21,Black,128GB,EE,Grade B,Working,1\n"
        )
    );
}

#[test]
fn extra_columns_are_dropped_and_do_not_split_groups() {
    let ws = Workspace::new();
    ws.write(
        "in.csv",
        &format!(
            "imei,{HEADER}\n\
             111,Apple,iPhone 12,Red,64GB,Unlocked,Grade A,Working\n\
             222, apple ,iPhone 12,Red,64GB,Unlocked,Grade A,Working\n"
        ),
    );

    ws.grouper("in.csv", "out.csv").assert().success();

    let out = ws.read("out.csv");
    assert!(!out.contains("imei"));
    assert!(out.ends_with("Apple,iPhone 12,Red,64GB,Unlocked,Grade A,Working,2\n"));
}

#[test]
fn counts_sum_to_input_records() {
    let ws = Workspace::new();
    let mut input = format!("{HEADER}\n");
    let colours = ["Red", "red", "Blue", "BLUE", "Green"];
    for i in 0..25 {
        input.push_str(&format!("Apple,iPhone 12,{},64GB,Unlocked,Grade A,Working\n", colours[i % colours.len()]));
    }
    ws.write("in.csv", &input);

    ws.grouper("in.csv", "out.json").arg("--output-format=json").assert().success();

    let rows: Vec<serde_json::Value> = serde_json::from_str(&ws.read("out.json")).unwrap();
    assert_eq!(rows.len(), 3);
    let total: u64 = rows.iter().map(|r| r["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 25);
    assert_eq!(rows[0]["colour_name"], "Red");
    assert_eq!(rows[0]["count"], 10);
}

#[test]
fn csv_output_regroups_to_single_counts() {
    let ws = Workspace::new();
    ws.write("in.csv", PHONES_CSV);
    ws.grouper("in.csv", "first.csv").assert().success();

    ws.grouper("first.csv", "second.csv").assert().success();

    let first = ws.read("first.csv");
    let second = ws.read("second.csv");
    assert_eq!(first.lines().count(), second.lines().count());
    for (a, b) in first.lines().skip(1).zip(second.lines().skip(1)) {
        let prefix = a.rsplit_once(',').unwrap().0;
        assert_eq!(b, format!("{prefix},1"));
    }
}

#[test]
fn header_only_csv_writes_empty_output_in_every_format() {
    let ws = Workspace::new();
    ws.write("in.csv", &format!("{HEADER}\n"));

    ws.grouper("in.csv", "out.csv").assert().success();
    ws.grouper("in.csv", "out.json").arg("--output-format=json").assert().success();
    ws.grouper("in.csv", "out.xml").arg("--output-format=xml").assert().success();

    assert_eq!(ws.read("out.csv"), format!("{HEADER},count\n"));
    assert_eq!(ws.read("out.json"), "[]\n");
    let xml = ws.read("out.xml");
    assert!(xml.contains("<rows>") || xml.contains("<rows/>"));
    assert!(!xml.contains("<row>"));
}

#[test]
fn existing_output_is_replaced() {
    let ws = Workspace::new();
    ws.write("in.csv", PHONES_CSV);
    ws.write("out.csv", "stale contents that are longer than nothing\n".repeat(50).as_str());

    ws.grouper("in.csv", "out.csv").assert().success();

    assert!(ws.read("out.csv").starts_with("brand_name,"));
    assert!(!ws.read("out.csv").contains("stale"));
}
