//! Tests for transcript composition through the generator.

use std::path::PathBuf;

use laurel_core::config::LaurelConfig;
use laurel_core::errors::{GeneratorError, RenderError};
use laurel_engine::TranscriptGenerator;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn generator(dir: &tempfile::TempDir, roster: &str, writeups: &str) -> TranscriptGenerator {
    let roster_path = write_file(dir, "data.csv", roster);
    let writeups_path = write_file(dir, "writeups.csv", writeups);
    TranscriptGenerator::new(&roster_path, &writeups_path, LaurelConfig::default()).unwrap()
}

#[test]
fn end_to_end_single_accolade() {
    let dir = tempdir();
    let gen = generator(
        &dir,
        "name,accolade_honor\nAnn,yes\n",
        "accolade,writeup\nhonor,Honored for ${name}.\n",
    );
    let transcript = gen.transcript(gen.roster().row(0).unwrap()).unwrap();
    assert_eq!(transcript, "Honored for Ann.");
}

#[test]
fn all_flags_no_or_absent_yields_empty_transcript() {
    let dir = tempdir();
    let gen = generator(
        &dir,
        "name,accolade_honor,accolade_valor\nAnn,no,\n",
        "accolade,writeup\nhonor,Honored.\nvalor,Valorous.\n",
    );
    let transcript = gen.transcript(gen.roster().row(0).unwrap()).unwrap();
    assert_eq!(transcript, "");
}

#[test]
fn flag_casing_is_accepted() {
    let dir = tempdir();
    let gen = generator(
        &dir,
        "name,accolade_honor\nAnn,YES\n",
        "accolade,writeup\nhonor,Honored.\n",
    );
    let transcript = gen.transcript(gen.roster().row(0).unwrap()).unwrap();
    assert_eq!(transcript, "Honored.");
}

#[test]
fn sections_follow_writeups_file_order() {
    let dir = tempdir();
    // Roster lists valor before honor; the writeups file orders honor first.
    let gen = generator(
        &dir,
        "name,accolade_valor,accolade_honor\nAnn,yes,yes\n",
        "accolade,writeup\nhonor,First.\nvalor,Second.\n",
    );
    let transcript = gen.transcript(gen.roster().row(0).unwrap()).unwrap();
    assert_eq!(transcript, "First. Second.");
}

#[test]
fn sections_join_with_single_space() {
    let dir = tempdir();
    let gen = generator(
        &dir,
        "name,accolade_a,accolade_b,accolade_c\nAnn,yes,no,yes\n",
        "accolade,writeup\na,Alpha.\nb,Bravo.\nc,Charlie.\n",
    );
    let transcript = gen.transcript(gen.roster().row(0).unwrap()).unwrap();
    assert_eq!(transcript, "Alpha. Charlie.");
}

#[test]
fn flag_without_writeup_is_skipped() {
    let dir = tempdir();
    let gen = generator(
        &dir,
        "name,accolade_honor,accolade_unsung\nAnn,yes,yes\n",
        "accolade,writeup\nhonor,Honored.\n",
    );
    let transcript = gen.transcript(gen.roster().row(0).unwrap()).unwrap();
    assert_eq!(transcript, "Honored.");
}

#[test]
fn absent_variable_cell_becomes_none_literal() {
    let dir = tempdir();
    let gen = generator(
        &dir,
        "name,rank,accolade_honor\nAnn,,yes\n",
        "accolade,writeup\nhonor,Rank: ${rank}.\n",
    );
    let transcript = gen.transcript(gen.roster().row(0).unwrap()).unwrap();
    assert_eq!(transcript, "Rank: None.");
}

#[test]
fn missing_variable_propagates() {
    let dir = tempdir();
    let gen = generator(
        &dir,
        "name,accolade_honor\nAnn,yes\n",
        "accolade,writeup\nhonor,Cited by ${commander}.\n",
    );
    let err = gen.transcript(gen.roster().row(0).unwrap()).unwrap_err();
    match err {
        RenderError::MissingVariable { accolade, variable } => {
            assert_eq!(accolade, "honor");
            assert_eq!(variable, "commander");
        }
        other => panic!("Expected MissingVariable, got: {other:?}"),
    }
}

#[test]
fn construction_fails_with_aggregate_report() {
    let dir = tempdir();
    let roster_path = write_file(&dir, "data.csv", "rank\nCaptain\n");
    let writeups_path = write_file(&dir, "writeups.csv", "accolade,writeup\nhonor,Honored.\n");
    let err =
        TranscriptGenerator::new(&roster_path, &writeups_path, LaurelConfig::default())
            .unwrap_err();
    match err {
        GeneratorError::Validation(e) => {
            assert!(e.report.contains("missing_name"));
            assert!(e.report.contains("no_accolades"));
        }
        other => panic!("Expected Validation, got: {other:?}"),
    }
}

#[test]
fn column_partition_respects_prefix() {
    let dir = tempdir();
    let gen = generator(
        &dir,
        "name,rank,accolade_honor\nAnn,Captain,yes\n",
        "accolade,writeup\nhonor,Honored.\n",
    );
    assert_eq!(gen.accolade_columns(), ["accolade_honor"]);
    assert_eq!(gen.variable_columns(), ["name", "rank"]);

    let vars = gen.person_variables(gen.roster().row(0).unwrap());
    assert_eq!(vars.get("name").map(String::as_str), Some("Ann"));
    assert_eq!(vars.get("rank").map(String::as_str), Some("Captain"));
    assert!(!vars.contains_key("accolade_honor"));
}
