use meme_mind::config::Config;
use meme_mind::meme::font::bundled_font;
use meme_mind::meme::{FsTemplateStore, MemeRenderer, TemplateStore, generate_caption};
use meme_mind::nlp::TextAnalyzer;
use meme_mind::server::MemeMindServer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::sync::Arc;

fn config_in(root: &Path) -> Config {
    let mut config = Config::default();
    config.paths.templates_dir = root.join("templates");
    config.paths.output_dir = root.join("output");
    config.paths.fonts_dir = root.join("fonts");
    config
}

#[test]
fn caption_split_examples() {
    let short = generate_caption("just three words");
    assert_eq!(short.top, "");
    assert_eq!(short.bottom, "just three words");

    let even = generate_caption("a b c d");
    assert_eq!((even.top.as_str(), even.bottom.as_str()), ("a b", "c d"));
}

#[test]
fn happy_text_produces_valid_image_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let store = Arc::new(FsTemplateStore::open(&config.paths.templates_dir).unwrap());
    let renderer = MemeRenderer::new(&config, store.clone());
    let analyzer = TextAnalyzer::english();

    let analysis = analyzer.analyze("I am so happy today! This is the best day ever!");
    let params = analyzer.get_meme_parameters(&analysis);

    let mut rng = StdRng::seed_from_u64(2024);
    let template = renderer.selector().select_template(&params, &mut rng).unwrap();
    assert!(template.path.is_file());

    let output = renderer.create_meme(&params, None, &mut rng).unwrap();
    assert!(output.is_file());
    let img = image::open(&output).unwrap();
    assert!(img.width() > 0 && img.height() > 0);

    // default mapping persisted on first use
    assert!(dir.path().join("templates").join("mappings.json").is_file());
    assert!(!store.list_assets().unwrap().is_empty());
}

#[test]
fn selection_never_points_at_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let store = Arc::new(FsTemplateStore::open(&config.paths.templates_dir).unwrap());
    let renderer = MemeRenderer::with_font(&config, store, None);
    let analyzer = TextAnalyzer::english();

    let mut rng = StdRng::seed_from_u64(1);
    for text in [
        "Why is my code broken?",
        "The team lost the game and I'm so angry",
        "",
        "ok",
    ] {
        let params = analyzer.get_meme_parameters(&analyzer.analyze(text));
        let selected = renderer.selector().select_template(&params, &mut rng).unwrap();
        assert!(selected.path.is_file(), "{} missing", selected.path.display());
    }
}

#[test]
fn placeholder_on_disk_carries_its_label() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let store = Arc::new(FsTemplateStore::open(&config.paths.templates_dir).unwrap());
    let renderer = MemeRenderer::with_font(&config, store, bundled_font());
    assert!(renderer.has_font());

    let analyzer = TextAnalyzer::english();
    let params = analyzer.get_meme_parameters(&analyzer.analyze("Why is my code broken?"));
    let mut rng = StdRng::seed_from_u64(8);
    let selected = renderer.selector().select_template(&params, &mut rng).unwrap();

    let img = image::open(&selected.path).unwrap().to_rgb8();
    let (w, h) = img.dimensions();
    let dark = (h / 3..2 * h / 3)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| img.get_pixel(x, y).0.iter().all(|c| *c < 100))
        .count();
    assert!(dark > 100, "placeholder label missing, {dark} dark pixels");
}

#[test]
fn malformed_mapping_falls_back_to_default_trio() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::create_dir_all(&config.paths.templates_dir).unwrap();
    std::fs::write(config.paths.templates_dir.join("mappings.json"), "[oops").unwrap();

    let store = Arc::new(FsTemplateStore::open(&config.paths.templates_dir).unwrap());
    let renderer = MemeRenderer::with_font(&config, store, None);
    assert!(renderer.selector().mapping().is_empty());

    let analyzer = TextAnalyzer::english();
    let params = analyzer.get_meme_parameters(&analyzer.analyze("I am so happy"));
    let mut rng = StdRng::seed_from_u64(3);
    let selected = renderer.selector().select_template(&params, &mut rng).unwrap();
    assert!(
        ["confused_nick_young.jpg", "thinking_face.jpg", "surprised_pikachu.jpg"]
            .contains(&selected.name.as_str())
    );
}

#[test]
fn seeded_servers_pick_the_same_templates() {
    let run = |seed: u64| {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.selection.seed = Some(seed);
        let server = MemeMindServer::new(config).unwrap();
        server.generate_meme("The stock market crashed today").unwrap();
        server.generate_meme("Why is everyone so confused?").unwrap();
        server.list_templates().unwrap()
    };
    assert_eq!(run(17), run(17));
}
