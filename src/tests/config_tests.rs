//! tests/config_tests.rs
//! Pruebas de resolución de la configuración de render y de la config del servidor.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::ffi::OsString;
    use std::path::Path;

    use crate::config::pdf_config::RenderConfig;
    use crate::config::server_config::{ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
    use crate::errors::InputError;
    use crate::models::pdf_model::PdfFormValues;
    use crate::services::form_service::resolve_render_config;
    use crate::services::wkhtmltopdf_engine::build_args;

    fn form(pairs: &[(&str, &str)]) -> PdfFormValues {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn defaults_when_no_options() {
        let cfg = resolve_render_config(&PdfFormValues::new()).unwrap();
        assert_eq!(cfg, RenderConfig::default());
        assert_eq!(cfg.page_size, "A4");
        assert_eq!(cfg.orientation, "Landscape");
        assert_eq!(
            (cfg.margin_top, cfg.margin_bottom, cfg.margin_left, cfg.margin_right),
            (10, 10, 10, 10)
        );
        assert!(cfg.page_shrinking);
        assert_eq!(cfg.page_zoom, 1.0);
        assert_eq!(cfg.dpi, 600);
    }

    #[test]
    fn empty_values_keep_defaults() {
        let values = form(&[
            ("page_size", ""),
            ("orientation", ""),
            ("margin_top", ""),
            ("zoom", ""),
            ("shrink", ""),
        ]);
        assert_eq!(resolve_render_config(&values).unwrap(), RenderConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let values = form(&[
            ("page_size", "Letter"),
            ("orientation", "Portrait"),
            ("margin_top", "0"),
            ("margin_bottom", "25"),
            ("margin_left", "5"),
            ("margin_right", "+7"),
            ("zoom", "1.25"),
        ]);
        let cfg = resolve_render_config(&values).unwrap();
        assert_eq!(cfg.page_size, "Letter");
        assert_eq!(cfg.orientation, "Portrait");
        assert_eq!(cfg.margin_top, 0);
        assert_eq!(cfg.margin_bottom, 25);
        assert_eq!(cfg.margin_left, 5);
        assert_eq!(cfg.margin_right, 7);
        assert_eq!(cfg.page_zoom, 1.25);
        assert_eq!(cfg.dpi, 600);
    }

    #[test]
    fn dpi_is_never_taken_from_the_form() {
        let cfg = resolve_render_config(&form(&[("dpi", "72")])).unwrap();
        assert_eq!(cfg.dpi, 600);
    }

    #[test]
    fn shrink_only_disabled_by_literal_one() {
        let disabled = resolve_render_config(&form(&[("shrink", "1")])).unwrap();
        assert!(!disabled.page_shrinking);

        for value in ["0", "true", "yes", " 1", "01"] {
            let cfg = resolve_render_config(&form(&[("shrink", value)])).unwrap();
            assert!(cfg.page_shrinking, "shrink={:?} no debería desactivar", value);
        }
    }

    #[test]
    fn invalid_margin_names_the_field() {
        for field in ["margin_top", "margin_bottom", "margin_left", "margin_right"] {
            let err = resolve_render_config(&form(&[(field, "10mm")])).unwrap_err();
            assert_eq!(
                err,
                InputError::InvalidMargin {
                    field,
                    value: "10mm".to_string()
                }
            );
        }
    }

    #[test]
    fn negative_and_fractional_margins_are_rejected() {
        for value in ["-5", "2.5", "abc"] {
            let err = resolve_render_config(&form(&[("margin_left", value)])).unwrap_err();
            assert!(matches!(err, InputError::InvalidMargin { field: "margin_left", .. }));
        }
    }

    #[test]
    fn invalid_zoom_is_rejected() {
        for value in ["abc", "1,5", "1.2.3", "NaN", "inf"] {
            let err = resolve_render_config(&form(&[("zoom", value)])).unwrap_err();
            assert_eq!(
                err,
                InputError::InvalidZoom {
                    value: value.to_string()
                }
            );
        }
    }

    #[test]
    fn zero_and_negative_zoom_parse() {
        for (value, expected) in [("0", 0.0), ("-1", -1.0), ("0.5", 0.5)] {
            let cfg = resolve_render_config(&form(&[("zoom", value)])).unwrap();
            assert_eq!(cfg.page_zoom, expected);
        }
    }

    #[test]
    fn input_errors_name_the_field() {
        let err = InputError::InvalidMargin {
            field: "margin_top",
            value: "x".to_string(),
        };
        assert_eq!(err.to_string(), "entero inválido en margin_top: \"x\"");
    }

    #[test]
    fn margin_error_wins_even_with_valid_fields() {
        let values = form(&[("page_size", "A3"), ("zoom", "2"), ("margin_top", "x")]);
        assert!(resolve_render_config(&values).is_err());
    }

    #[test]
    fn query_is_consulted_before_body() {
        let mut body = PdfFormValues::new();
        body.insert_first("page_size", "A3");
        body.insert_first("page_size", "A5");
        body.insert_first("margin_left", "5");
        body.insert_first("zoom", "2");
        let query = vec![
            ("page_size".to_string(), "Letter".to_string()),
            ("orientation".to_string(), "Portrait".to_string()),
            ("zoom".to_string(), String::new()),
            ("file".to_string(), "ignorado".to_string()),
        ];
        let values = PdfFormValues::from_query(query).merge_body(body);

        assert_eq!(values.get("page_size"), Some("Letter"));
        assert_eq!(values.get("orientation"), Some("Portrait"));
        assert_eq!(values.get("margin_left"), Some("5"));
        // Un valor vacío en el query bloquea el del cuerpo.
        assert_eq!(values.get("zoom"), None);
        assert_eq!(values.get("file"), None);

        let cfg = resolve_render_config(&values).unwrap();
        assert_eq!(cfg.page_size, "Letter");
        assert_eq!(cfg.page_zoom, 1.0);
    }

    #[test]
    fn first_value_wins_within_body() {
        let values: PdfFormValues = [("page_size", "A3"), ("page_size", "A5")]
            .into_iter()
            .collect();
        assert_eq!(values.get("page_size"), Some("A3"));
    }

    #[test]
    fn wkhtmltopdf_args_follow_config() {
        let cfg = RenderConfig::default();
        let args = build_args(&cfg, Path::new("/tmp/in.html"), Path::new("/tmp/out.pdf"));
        let args: Vec<String> = args
            .into_iter()
            .map(|a: OsString| a.to_string_lossy().into_owned())
            .collect();

        let expected: Vec<&str> = vec![
            "--page-size",
            "A4",
            "--orientation",
            "Landscape",
            "--margin-top",
            "10mm",
            "--margin-bottom",
            "10mm",
            "--margin-left",
            "10mm",
            "--margin-right",
            "10mm",
            "--dpi",
            "600",
            "--quiet",
            "/tmp/in.html",
            "--enable-smart-shrinking",
            "--zoom",
            "1",
            "/tmp/out.pdf",
        ];
        assert_eq!(args, expected);
    }

    #[test]
    fn wkhtmltopdf_args_disable_shrinking() {
        let cfg = RenderConfig {
            page_shrinking: false,
            page_zoom: 0.75,
            ..RenderConfig::default()
        };
        let args: Vec<String> = build_args(&cfg, Path::new("in.html"), Path::new("out.pdf"))
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert!(args.contains(&"--disable-smart-shrinking".to_string()));
        assert!(!args.contains(&"--enable-smart-shrinking".to_string()));
        let zoom_at = args.iter().position(|a| a == "--zoom").unwrap();
        assert_eq!(args[zoom_at + 1], "0.75");
    }

    #[test]
    fn server_config_defaults() {
        let cfg = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.render_concurrency, 8);
        assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(cfg.wkhtmltopdf_path.is_none());
    }

    #[test]
    fn server_config_from_vars() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PORT", "9090"),
            ("RENDER_CONCURRENCY", "0"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("WKHTMLTOPDF_PATH", "/usr/local/bin/wkhtmltopdf"),
        ]);
        let cfg = ServerConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.render_concurrency, 1);
        assert_eq!(cfg.max_upload_bytes, 1024);
        assert_eq!(
            cfg.wkhtmltopdf_path.as_deref(),
            Some(Path::new("/usr/local/bin/wkhtmltopdf"))
        );
    }

    #[test]
    fn server_config_rejects_bad_port() {
        let err = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));

        // Vacío cuenta como no definido.
        let cfg = ServerConfig::from_lookup(|key| (key == "PORT").then(String::new)).unwrap();
        assert_eq!(cfg.port, 8080);
    }
}
