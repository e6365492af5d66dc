//! Snapshot persistence tests: file round-trips and version handling.

use pretty_assertions::assert_eq;
use rill_runtime::{
    store, BinaryOp, Evaluator, Expr, Interpreter, Literal, MemorySink, Program, StoreError,
};

fn sample_registry() -> Interpreter {
    let mut countdown = Program::new("countdown");
    countdown.set_filename("countdown.json");
    countdown.set_variable("n", Literal::Int(3));
    countdown.append_instruction(Expr::while_loop(
        Expr::var("n"),
        Expr::seq(vec![
            Expr::print(vec![Expr::string("n ="), Expr::var("n")]),
            Expr::assign("n", Expr::binary(BinaryOp::Sub, Expr::var("n"), Expr::int(1))),
        ]),
    ));

    let mut greeter = Program::new("greeter");
    greeter.set_variable("greeting", Literal::string("hello"));
    greeter.append_instruction(Expr::print(vec![Expr::var("greeting")]));

    let mut interpreter = Interpreter::new();
    interpreter.add_program(countdown).unwrap();
    interpreter.add_program(greeter).unwrap();
    interpreter
}

#[test]
fn test_save_load_round_trip_is_structural() {
    let interpreter = sample_registry();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");

    store::save(&path, &interpreter).unwrap();
    let restored = store::load(&path).unwrap();

    assert_eq!(restored, interpreter);
    let names: Vec<&str> = restored.program_names().collect();
    assert_eq!(names, vec!["countdown", "greeter"]);
}

#[test]
fn test_restored_program_still_evaluates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");
    store::save(&path, &sample_registry()).unwrap();

    let mut restored = store::load(&path).unwrap();
    let program = restored.get_program_mut("countdown").unwrap();

    let mut sink = MemorySink::new();
    let result = Evaluator::new(&mut sink).run(program).unwrap();
    assert_eq!(result, Literal::Void);
    assert_eq!(sink.lines(), &["n = 3", "n = 2", "n = 1"]);
    assert_eq!(program.get_variable("n"), Ok(&Literal::Int(0)));
}

#[test]
fn test_filename_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");
    store::save(&path, &sample_registry()).unwrap();

    let restored = store::load(&path).unwrap();
    assert_eq!(
        restored.get_program("countdown").unwrap().filename(),
        Some("countdown.json")
    );
    assert_eq!(restored.get_program("greeter").unwrap().filename(), None);
}

#[test]
fn test_load_missing_file_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = store::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn test_load_garbage_is_malformed_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "not a snapshot").unwrap();
    let err = store::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}

#[test]
fn test_load_rejects_unsupported_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.json");
    std::fs::write(&path, r#"{"snapshot_version": 999, "programs": {}}"#).unwrap();
    let err = store::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::UnsupportedVersion { found: 999 }));
}
