// -- < Testing shader errors > -------------------------------
#[cfg(test)]
pub mod shader_error_test {
    use std::error::Error;
    use std::io;

    use crate::core::rendering::shader::{
        truncate_info_log, ShaderError, ShaderStage, INFO_LOG_CAPACITY,
    };

    #[test]
    fn test_stage_tags() {
        assert_eq!(ShaderStage::Vertex.tag(), "VERTEX");
        assert_eq!(ShaderStage::Fragment.tag(), "FRAGMENT");
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);

        let link = ShaderError::Link {
            log: "error".to_owned(),
        };
        assert_eq!(link.stage_tag(), "PROGRAM");
    }

    #[test]
    fn test_read_error_exposes_io_source() {
        let err = ShaderError::ResourceRead {
            stage: ShaderStage::Fragment,
            path: "SimpleShader.frag".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        let message = err.to_string();
        assert!(message.contains("FRAGMENT"));
        assert!(message.contains("SimpleShader.frag"));
        assert!(err.source().is_some());
        assert!(err.log().is_none());
    }

    #[test]
    fn test_compile_error_display_includes_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: "0:3(1): error: syntax error".to_owned(),
        };

        assert!(err.to_string().contains("0:3(1): error: syntax error"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_short_logs_are_untouched() {
        let log = "0:1(1): error: oops".to_owned();
        assert_eq!(truncate_info_log(log.clone()), log);
        assert_eq!(truncate_info_log(String::new()), "");
    }

    #[test]
    fn test_long_logs_are_cut_on_char_boundary() {
        // 3-byte characters never line up with the capacity
        let log = "€".repeat(INFO_LOG_CAPACITY);
        let truncated = truncate_info_log(log.clone());

        assert!(truncated.len() <= INFO_LOG_CAPACITY);
        assert!(truncated.len() > INFO_LOG_CAPACITY - 3);
        assert!(log.starts_with(&truncated));
    }
}
