use super::*;

#[test]
fn every_color_format_pair_is_accepted() {
    for color in AVAILABLE_COLORS {
        for format in AVAILABLE_FILE_FORMATS {
            let request = ConversionRequest {
                color: color.to_string(),
                file_format: format.to_string(),
                ..Default::default()
            };
            assert!(request.validate().is_ok(), "rejected {color}/{format}");
        }
    }
}

#[test]
fn unknown_color_is_a_configuration_error() {
    let request = ConversionRequest {
        color: "purple".to_string(),
        ..Default::default()
    };
    let err = request.validate().unwrap_err();
    assert!(matches!(&err, GlyphcastError::Configuration(_)));
    assert!(err.to_string().contains("purple"));
}

#[test]
fn unknown_file_format_is_a_configuration_error() {
    let request = ConversionRequest {
        file_format: "jpg".to_string(),
        ..Default::default()
    };
    let err = request.validate().unwrap_err();
    assert!(matches!(&err, GlyphcastError::Configuration(_)));
    assert!(err.to_string().contains("jpg"));
}

#[test]
fn zero_sizes_are_rejected() {
    let zero_point = ConversionRequest {
        point_size: 0,
        ..Default::default()
    };
    assert!(zero_point.validate().is_err());

    let zero_canvas = ConversionRequest {
        image_size: 0,
        ..Default::default()
    };
    assert!(zero_canvas.validate().is_err());

    let zero_resize = ConversionRequest {
        resize_to: Some(0),
        ..Default::default()
    };
    assert!(zero_resize.validate().is_err());
}

#[test]
fn default_request_matches_the_documented_defaults() {
    let request = ConversionRequest::default();
    assert_eq!(request.color, "black");
    assert_eq!(request.point_size, 50);
    assert_eq!(request.image_size, 72);
    assert_eq!(request.file_format, "gif");
    assert!(request.validate().is_ok());
}
