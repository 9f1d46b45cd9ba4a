/*!
 * Tests for the error taxonomy
 */

use std::error::Error;
use std::path::Path;
use tanzil_importer::errors::{
    ImportError, IntegrityError, MalformedInputError, PipelineError, Stage, StageContext,
};

/// Test that a pipeline error names the file and the stage
#[test]
fn test_pipeline_error_display_shouldNameFileAndStage() {
    let error = PipelineError::new(
        "quran-simple.xml",
        Stage::Integrity,
        IntegrityError::DigestMismatch {
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        },
    );

    let message = error.to_string();
    assert!(message.starts_with("quran-simple.xml: integrity check failed:"));
    assert!(message.contains("expected aa, found bb"));
    assert!(error.source().is_some());
}

/// Test that at_stage wraps the error of a failed step
#[test]
fn test_at_stage_withError_shouldAttachPathAndStage() {
    let result: Result<(), MalformedInputError> =
        Err(MalformedInputError::EmptyFileNameSegment(".x.xml".to_string()));

    let error = result
        .at_stage(Path::new("/in/.x.xml"), Stage::Metadata)
        .unwrap_err();

    assert_eq!(error.stage, Stage::Metadata);
    assert_eq!(error.path, Path::new("/in/.x.xml"));
    assert!(matches!(
        error.error,
        ImportError::Malformed(MalformedInputError::EmptyFileNameSegment(_))
    ));
}

/// Test the messages of structural errors
#[test]
fn test_malformed_input_messages_shouldDescribeTheDefect() {
    let out_of_order = MalformedInputError::OutOfOrder {
        element: "aya",
        position: 3,
        declared: 5,
    };
    assert_eq!(out_of_order.to_string(), "<aya> #3 declares index 5");

    let segments = MalformedInputError::FileNameSegments {
        file_name: "en.mahdi.extra.xml".to_string(),
        segments: 4,
    };
    assert!(segments.to_string().contains("{language}.{author}.{extension}"));
}
