use objutils_core::errors::{ExError, ExErrorKind, ObjError};

#[test]
fn test_empty_path_conversion() {
    let ex_err: ExError = ObjError::EmptyPath.into();

    assert_eq!(ex_err.kind(), ExErrorKind::EmptyPath);
    assert_eq!(ex_err.code(), "ERR_EMPTY_PATH");
}

#[test]
fn test_deserialize_conversion() {
    let err = ObjError::Deserialize {
        path: "port".to_string(),
        message: "invalid type".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Deserialize);
    assert_eq!(ex_err.path(), Some("port"));
    assert_eq!(ex_err.message(), "invalid type");
}

#[test]
fn test_invalid_input_conversion() {
    let err = ObjError::InvalidInput {
        reason: "unknown logging profile 'loud'".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert!(ex_err.message().contains("loud"));
}

#[test]
fn test_obj_error_display() {
    let err = ObjError::Deserialize {
        path: "port".to_string(),
        message: "invalid type".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Value at 'port' could not be deserialized: invalid type"
    );
}

#[test]
fn test_ex_error_display_includes_code() {
    let ex_err: ExError = ObjError::EmptyPath.into();
    assert!(ex_err.to_string().starts_with("[ERR_EMPTY_PATH]"));
}

#[test]
fn test_ex_error_op_context() {
    let ex_err = ExError::from(ObjError::EmptyPath).with_op("set");
    assert_eq!(ex_err.op(), Some("set"));
    assert_eq!(ex_err.to_string(), "[ERR_EMPTY_PATH] in operation 'set': Path is empty (path: )");
}
