use assert_cmd::Command;
use predicates::prelude::*;

fn opsdesk() -> Command {
    Command::cargo_bin("opsdesk").unwrap()
}

#[test]
fn test_search_leads() {
    opsdesk()
        .args(["list", "leads", "--search", "tech"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Tech Solutions Inc"))
        .stdout(predicates::str::contains("ABC Corporation").not());
}

#[test]
fn test_filter_assets_by_status() {
    opsdesk()
        .args(["list", "assets", "--filter", "status=Issued"])
        .assert()
        .success()
        .stdout(predicates::str::contains("AST-501"))
        .stdout(predicates::str::contains("AST-503"))
        .stdout(predicates::str::contains("AST-502").not());
}

#[test]
fn test_filter_and_search_combine() {
    opsdesk()
        .args([
            "list",
            "expenses",
            "--filter",
            "category=Travel",
            "--search",
            "cab",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Cab Fare"))
        .stdout(predicates::str::contains("Flight Tickets").not());
}

#[test]
fn test_filter_all_sentinel_is_noop() {
    opsdesk()
        .args(["list", "tickets", "--filter", "status=all"])
        .assert()
        .success()
        .stdout(predicates::str::contains("TKT-2201"))
        .stdout(predicates::str::contains("TKT-2205"));
}

#[test]
fn test_empty_result_message() {
    opsdesk()
        .args(["list", "leads", "--search", "zzzz no such company"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No leads found."));
}

#[test]
fn test_cards_view_same_records_as_table() {
    let table = opsdesk()
        .args(["list", "leads", "--filter", "status=Qualified"])
        .assert()
        .success();
    let table_out = String::from_utf8(table.get_output().stdout.clone()).unwrap();

    let cards = opsdesk()
        .args(["list", "leads", "--filter", "status=Qualified", "--view", "cards"])
        .assert()
        .success();
    let cards_out = String::from_utf8(cards.get_output().stdout.clone()).unwrap();

    for id in ["LD-1003"] {
        assert!(table_out.contains(id));
        assert!(cards_out.contains(id));
    }
    assert!(!cards_out.contains("LD-1001"));
}

#[test]
fn test_unknown_module_fails() {
    opsdesk()
        .args(["list", "invoices"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown module"));
}

#[test]
fn test_export_writes_artifact() {
    let temp_dir = tempfile::tempdir().unwrap();
    opsdesk()
        .args(["export", "leads", "--format", "csv"])
        .arg("--out")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 5 records"));

    let files: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("leads-"));
    assert!(files[0].ends_with(".csv"));
}

#[test]
fn test_export_filtered_empty_list_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    opsdesk()
        .args(["export", "leads", "--search", "zzzz"])
        .arg("--out")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No records to export."));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_report_requires_date_range() {
    let temp_dir = tempfile::tempdir().unwrap();
    opsdesk()
        .arg("report")
        .arg("--out")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("date range"));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_report_prints_all_metrics() {
    opsdesk()
        .args(["report", "--from", "2020-01-01", "--to", "2030-01-01"])
        .assert()
        .success()
        .stdout(predicates::str::contains("New Leads Assigned"))
        .stdout(predicates::str::contains("Deals Won"))
        .stdout(predicates::str::contains("Conversion Rate"));
}

#[test]
fn test_import_reports_count_and_errors() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("leads.csv");
    std::fs::write(
        &file,
        "company,contact,email,phone,status,source,owner\n\
         Nimbus Retail,Asha Verma,asha@nimbus.in,+91 90000 11111,New,Website,Priya Nair\n\
         ,Broken Row,broken@x.io,,New,Web,o\n",
    )
    .unwrap();

    opsdesk()
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicates::str::contains("1 records imported"))
        .stdout(predicates::str::contains("Row 3: missing company"))
        .stdout(predicates::str::contains("Completed with errors"));
}

#[test]
fn test_assign_requires_lead_role() {
    opsdesk()
        .env("OPSDESK_ROLE", "Member")
        .args(["assign", "TKT-2202", "Kiran Shah"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot assign"));
}

#[test]
fn test_assign_as_admin_succeeds() {
    opsdesk()
        .env("OPSDESK_ROLE", "Admin")
        .args(["assign", "TKT-2202", "Kiran Shah"])
        .assert()
        .success()
        .stdout(predicates::str::contains("assigned to Kiran Shah"));
}

#[test]
fn test_illegal_status_jump_rejected() {
    opsdesk()
        .args(["status", "TKT-2201", "Closed"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Cannot move ticket"));
}

#[test]
fn test_backup_creates_archive() {
    let temp_dir = tempfile::tempdir().unwrap();
    opsdesk()
        .arg("backup")
        .arg("--out")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Backed up 10 datasets"));

    let files: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with(".tar.gz"));
}
