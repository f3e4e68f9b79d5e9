use super::*;

#[test]
fn defaults_validate() {
    let cfg = GenerateConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.width, 512);
    assert_eq!(cfg.frames_count, 30);
    assert_eq!(cfg.duration_ms, 120);
    assert_eq!(cfg.tile_size, 8);
    assert_eq!(cfg.background, Background::Transparent);
}

#[test]
fn preconditions_fail_fast() {
    let bad = [
        GenerateConfig {
            tile_size: 0,
            ..GenerateConfig::default()
        },
        GenerateConfig {
            frames_count: 0,
            ..GenerateConfig::default()
        },
        GenerateConfig {
            duration_ms: 0,
            ..GenerateConfig::default()
        },
        GenerateConfig {
            canvas: Canvas {
                width: 0,
                height: 4,
            },
            ..GenerateConfig::default()
        },
        GenerateConfig {
            gradient: GradientConfig {
                stop_count: 1,
                ..GradientConfig::default()
            },
            ..GenerateConfig::default()
        },
        GenerateConfig {
            threading: RenderThreading {
                parallel: true,
                threads: Some(0),
            },
            ..GenerateConfig::default()
        },
    ];
    for cfg in bad {
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("validation error:"), "{err}");
    }
}

#[test]
fn json_config_fills_defaults() {
    let cfg = GenerateConfig::from_json(
        r#"{"out_path": "out/a.gif", "canvas": {"width": 64, "height": 32}, "seed": 7, "background": "black"}"#,
    )
    .unwrap();
    assert_eq!(cfg.out_path, PathBuf::from("out/a.gif"));
    assert_eq!(cfg.canvas.height, 32);
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.background, Background::Black);
    assert_eq!(cfg.tile_size, 8);

    assert!(GenerateConfig::from_json(r#"{"tile": 8}"#).is_err());
    assert!(GenerateConfig::from_json(r#"{"tile_size": 0}"#).is_err());
}

#[test]
fn batch_file_names() {
    let cfg: BatchConfig =
        serde_json::from_str(r#"{"i_size": 512, "t_sizes": [64, 8], "prefix": "shape"}"#).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.file_name(64), "shape_512_64.gif");
    assert_eq!(cfg.file_name(8), "shape_512_8.gif");

    let empty = BatchConfig {
        t_sizes: vec![],
        ..cfg.clone()
    };
    assert!(empty.validate().is_err());
    let zero = BatchConfig {
        t_sizes: vec![8, 0],
        ..cfg
    };
    assert!(zero.validate().is_err());
}
