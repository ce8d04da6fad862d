mod common;

use bunner_crossdomain_rs::constants::header;
use bunner_crossdomain_rs::{CorsOptions, CrossDomain, ValidationError};
use common::builders::{api_with, cors, get_resource, request};
use common::headers::{has_header, header_value};

mod reflection {
    use super::*;

    #[test]
    fn should_echo_request_origin_by_default() {
        let api = api_with(CrossDomain::default().wrap_resource(get_resource()));

        let response = request().origin("https://client.example").dispatch(&api);

        assert_eq!(
            header_value(&response.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://client.example")
        );
        assert_eq!(header_value(&response.headers, header::VARY), Some("Origin"));
    }

    #[test]
    fn should_echo_request_origin_even_when_allow_origin_configured() {
        let api = api_with(
            cors()
                .allow_origin("https://app.example")
                .build()
                .wrap_resource(get_resource()),
        );

        let response = request().origin("https://other.example").dispatch(&api);

        assert_eq!(
            header_value(&response.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://other.example")
        );
    }

    #[test]
    fn should_echo_null_origin() {
        let api = api_with(CrossDomain::default().wrap_resource(get_resource()));

        let response = request().origin("null").dispatch(&api);

        assert_eq!(
            header_value(&response.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("null")
        );
    }
}

mod configured_origin {
    use super::*;

    #[test]
    fn should_emit_wildcard_when_reflection_disabled_and_origin_unset() {
        let api = api_with(
            cors()
                .reflect_origin(false)
                .build()
                .wrap_resource(get_resource()),
        );

        let response = request().origin("http://foo.bar").dispatch(&api);

        assert_eq!(
            header_value(&response.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("*")
        );
        assert!(!has_header(&response.headers, header::VARY));
    }

    #[test]
    fn should_emit_configured_origin_when_reflection_disabled() {
        let api = api_with(
            cors()
                .allow_origin("https://app.example")
                .allow_credentials(true)
                .reflect_origin(false)
                .build()
                .wrap_resource(get_resource()),
        );

        let response = request()
            .origin("https://other.example")
            .cookie("session=abc")
            .dispatch(&api);

        assert_eq!(
            header_value(&response.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://app.example")
        );
        assert_eq!(
            header_value(&response.headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
    }
}

mod validation {
    use super::*;

    #[test]
    fn should_report_credentials_with_wildcard_when_reflection_disabled() {
        let options = cors().allow_credentials(true).reflect_origin(false).options();

        assert_eq!(
            options.validate(),
            Err(ValidationError::CredentialsRequireSpecificOrigin)
        );
    }

    #[test]
    fn should_report_allow_origin_with_path_when_reflection_disabled() {
        let options = CorsOptions {
            allow_origin: Some("https://app.example/".into()),
            reflect_origin: Some(false),
            ..CorsOptions::default()
        };

        assert_eq!(
            options.validate(),
            Err(ValidationError::InvalidAllowOrigin(
                "https://app.example/".into()
            ))
        );
    }

    #[test]
    fn should_decorate_with_allow_origin_as_given_when_validation_fails() {
        let options = CorsOptions {
            allow_origin: Some("https://app.example/".into()),
            reflect_origin: Some(false),
            ..CorsOptions::default()
        };
        let api = api_with(CrossDomain::new(options).wrap_resource(get_resource()));

        let response = request().origin("http://foo.bar").dispatch(&api);

        assert_eq!(response.status, 200);
        assert_eq!(
            header_value(&response.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://app.example/")
        );
    }
}
