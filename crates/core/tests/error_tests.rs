// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use pokes_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_file_format() {
        let err = CoreError::InvalidFileFormat("bad header".into());
        assert_eq!(err.to_string(), "Invalid file format: bad header");
    }

    #[test]
    fn unsupported_version() {
        let err = CoreError::UnsupportedVersion(99);
        assert_eq!(err.to_string(), "Unsupported file version: 99");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("buffer overflow".into());
        assert_eq!(err.to_string(), "Serialization error: buffer overflow");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("hours must be finite".into());
        assert_eq!(err.to_string(), "Validation failed: hours must be finite");
    }

    #[test]
    fn invalid_card() {
        let err = CoreError::InvalidCard("unknown suit 'x'".into());
        assert_eq!(err.to_string(), "Invalid card: unknown suit 'x'");
    }

    #[test]
    fn duplicate_card() {
        let err = CoreError::DuplicateCard("Ah".into());
        assert_eq!(err.to_string(), "Duplicate card: Ah appears twice");
    }

    #[test]
    fn goal_not_found() {
        let err = CoreError::GoalNotFound("abc".into());
        assert_eq!(err.to_string(), "Goal not found: abc");
    }

    #[test]
    fn invalid_email() {
        let err = CoreError::InvalidEmail("'x': missing '@'".into());
        assert_eq!(err.to_string(), "Invalid email address: 'x': missing '@'");
    }

    #[test]
    fn duplicate_email() {
        let err = CoreError::DuplicateEmail("jo@state.edu".into());
        assert_eq!(err.to_string(), "Email already registered: jo@state.edu");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m.contains("no such file")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_bincode_error() {
        let bin_err = bincode::deserialize::<String>(&[0xFF]).unwrap_err();
        let err: CoreError = bin_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn question_mark_propagates_io() {
        fn read_missing() -> Result<Vec<u8>, CoreError> {
            Ok(std::fs::read("/definitely/not/a/real/path.pksn")?)
        }
        assert!(matches!(read_missing(), Err(CoreError::FileIO(_))));
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

mod traits {
    use super::*;

    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}

    #[test]
    fn is_std_error_and_thread_safe() {
        assert_error::<CoreError>();
    }

    #[test]
    fn debug_format_names_variant() {
        let err = CoreError::DuplicateCard("Ks".into());
        assert!(format!("{err:?}").contains("DuplicateCard"));
    }
}
