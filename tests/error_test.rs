use std::io;

use new_component::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ComponentExists {
        kind: "file".to_string(),
        path: "src/components/Button.tsx".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Looks like this component already exists! There's already a file at src/components/Button.tsx. Please delete it and try again."
    );

    let err = Error::TemplateNotFound { path: "templates/ts.js".to_string() };
    assert_eq!(err.to_string(), "Cannot proceed: template 'templates/ts.js' does not exist.");

    let err = Error::MissingComponentName;
    assert!(err.to_string().contains("new-component <name>"));
}
