// tests/integration/output_formats.rs
use serde_json::Value;

use crate::common::{PHONES_CSV, PHONES_JSON, PHONES_XML, Workspace};

#[test]
fn json_in_json_out() {
    let ws = Workspace::new();
    ws.write("in.json", PHONES_JSON);

    ws.grouper("in.json", "out.json").arg("--format=json").assert().success();

    let rows: Vec<Value> = serde_json::from_str(&ws.read("out.json")).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["brand_name"], "Apple");
    assert_eq!(rows[0]["count"], 2);
    assert_eq!(rows[1]["model_name"], "Galaxy S21");
    assert_eq!(rows[1]["count"], 1);
    let keys: Vec<&str> = rows[0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "brand_name",
            "model_name",
            "colour_name",
            "gb_spec_name",
            "network_name",
            "grade_name",
            "condition_name",
            "count"
        ]
    );
}

#[test]
fn xml_in_xml_out() {
    let ws = Workspace::new();
    ws.write("in.xml", PHONES_XML);

    ws.grouper("in.xml", "out.xml").arg("--format=xml").assert().success();

    let xml = ws.read("out.xml");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert_eq!(xml.matches("<row>").count(), 1);
    assert!(xml.contains("<brand_name>Apple</brand_name>"));
    assert!(xml.contains("<colour_name>Red</colour_name>"));
    assert!(xml.contains("<count>2</count>"));
}

#[test]
fn xml_output_reads_back_as_input() {
    let ws = Workspace::new();
    ws.write("in.csv", PHONES_CSV);
    ws.grouper("in.csv", "grouped.xml").arg("--output-format=xml").assert().success();

    ws.grouper("grouped.xml", "again.csv").args(["--format=xml", "--output-format=csv"]).assert().success();

    let again = ws.read("again.csv");
    assert_eq!(again.lines().count(), 3);
    assert!(again.contains("Apple,iPhone 12,Red,64GB,Unlocked,Grade A,Working,1"));
}

#[test]
fn json_input_to_csv_output() {
    let ws = Workspace::new();
    ws.write("in.json", PHONES_JSON);

    ws.grouper("in.json", "out.csv").args(["--format=json", "--output-format=csv"]).assert().success();

    let csv = ws.read("out.csv");
    assert!(csv.contains("Apple,iPhone 12,Red,64GB,Unlocked,Grade A,Working,2\n"));
}

#[test]
fn json_objects_are_matched_by_key_name() {
    let ws = Workspace::new();
    ws.write(
        "in.json",
        r#"[
  {"brand_name":"Apple","model_name":"iPhone 12","colour_name":"Red","gb_spec_name":"64GB",
   "network_name":"Unlocked","grade_name":"A","condition_name":"Working"},
  {"condition_name":"working","grade_name":"a","network_name":"unlocked","gb_spec_name":"64gb",
   "colour_name":"red","model_name":"iphone 12","brand_name":"apple"}
]"#,
    );

    ws.grouper("in.json", "out.json").arg("--format=json").assert().success();

    let rows: Vec<Value> = serde_json::from_str(&ws.read("out.json")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["count"], 2);
}

#[test]
fn json_scalars_are_stringified() {
    let ws = Workspace::new();
    ws.write(
        "in.json",
        r#"[{"brand_name":"Apple","model_name":12,"colour_name":"Red","gb_spec_name":64,
             "network_name":null,"grade_name":true,"condition_name":"Working"}]"#,
    );

    ws.grouper("in.json", "out.csv").args(["--format=json", "--output-format=csv"]).assert().success();

    assert!(ws.read("out.csv").ends_with("Apple,12,Red,64,,true,Working,1\n"));
}
