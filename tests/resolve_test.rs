use std::cell::RefCell;
use std::fs;
use std::io::{self, Cursor};
use tempfile::TempDir;
use yaml_bundle::{
    resolve, BundleError, DirLoader, Locale, MemoryLoader, ResolveOptions, Resolver,
    DEFAULT_FORMATS,
};

const FIXTURES: &str = "tests/fixtures/bundles";

fn ja_jp() -> Locale {
    Locale::parse("ja_JP").unwrap()
}

#[test]
fn test_prefers_language_bundle_over_root() {
    let loader = MemoryLoader::new()
        .with("B.yaml", "only_root: root\nshared: root")
        .with("B_ja.yml", "shared: ja");

    let store = resolve("B", &ja_jp(), &["yaml", "yml"], &loader).unwrap();
    assert_eq!(store.as_scalar_string("shared").unwrap(), "ja");
    assert!(matches!(
        store.as_scalar_string("only_root"),
        Err(BundleError::KeyNotFound { .. })
    ));
}

#[test]
fn test_parent_chaining_answers_misses() {
    let loader = MemoryLoader::new()
        .with("B.yaml", "only_root: root\nshared: root")
        .with("B_ja.yml", "shared: ja");

    let bundle = Resolver::new(loader).resolve("B", &ja_jp()).unwrap();
    assert_eq!(bundle.locale(), &Locale::parse("ja").unwrap());
    assert_eq!(bundle.as_scalar_string("shared").unwrap(), "ja");
    assert_eq!(bundle.as_scalar_string("only_root").unwrap(), "root");
}

#[test]
fn test_probe_order() {
    let probed = RefCell::new(Vec::new());
    let loader = |name: &str| -> io::Result<Option<Cursor<Vec<u8>>>> {
        probed.borrow_mut().push(name.to_string());
        Ok(None)
    };

    let err = resolve("B", &Locale::parse("ja_JP_x").unwrap(), DEFAULT_FORMATS, &loader)
        .unwrap_err();
    assert!(matches!(err, BundleError::BundleNotFound { .. }));
    assert_eq!(
        *probed.borrow(),
        vec![
            "B_ja_JP_x.yaml",
            "B_ja_JP_x.yml",
            "B_ja_JP.yaml",
            "B_ja_JP.yml",
            "B_ja.yaml",
            "B_ja.yml",
            "B.yaml",
            "B.yml",
        ]
    );
}

#[test]
fn test_search_stops_at_first_found_candidate() {
    let probed = RefCell::new(Vec::new());
    let loader = |name: &str| -> io::Result<Option<Cursor<Vec<u8>>>> {
        probed.borrow_mut().push(name.to_string());
        Ok((name == "B_ja_JP.yml").then(|| Cursor::new(b"a: found".to_vec())))
    };

    let store = resolve("B", &ja_jp(), DEFAULT_FORMATS, &loader).unwrap();
    assert_eq!(store.as_scalar_string("a").unwrap(), "found");
    assert_eq!(*probed.borrow(), vec!["B_ja_JP.yaml", "B_ja_JP.yml"]);
}

#[test]
fn test_broken_candidate_is_terminal() {
    let loader = MemoryLoader::new()
        .with("B_ja_JP.yaml", "greeting: [unterminated")
        .with("B_ja.yaml", "greeting: ja")
        .with("B.yaml", "greeting: root");

    let err = resolve("B", &ja_jp(), DEFAULT_FORMATS, &loader).unwrap_err();
    match err {
        BundleError::BundleLoadError { name, source } => {
            assert_eq!(name, "B_ja_JP.yaml");
            assert!(matches!(*source, BundleError::MalformedDocument { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_broken_candidate_skips_remaining_formats() {
    let probed = RefCell::new(Vec::new());
    let loader = |name: &str| -> io::Result<Option<Cursor<Vec<u8>>>> {
        probed.borrow_mut().push(name.to_string());
        let text: &[u8] = match name {
            "B_ja_JP.yaml" => b"greeting: [unterminated",
            "B_ja_JP.yml" => b"greeting: valid",
            _ => return Ok(None),
        };
        Ok(Some(Cursor::new(text.to_vec())))
    };

    let err = resolve("B", &ja_jp(), DEFAULT_FORMATS, &loader).unwrap_err();
    assert!(matches!(err, BundleError::BundleLoadError { ref name, .. } if name == "B_ja_JP.yaml"));
    assert_eq!(*probed.borrow(), vec!["B_ja_JP.yaml"]);
}

#[test]
fn test_value_rejected_by_its_tag_is_a_load_error() {
    let loader = MemoryLoader::new()
        .with("B_ja.yaml", "greeting: !!bool maybe")
        .with("B.yaml", "greeting: root");

    let err = resolve("B", &ja_jp(), DEFAULT_FORMATS, &loader).unwrap_err();
    match err {
        BundleError::BundleLoadError { name, source } => {
            assert_eq!(name, "B_ja.yaml");
            assert!(matches!(*source, BundleError::MalformedDocument { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_wrong_root_shape_is_a_load_error() {
    let loader = MemoryLoader::new()
        .with("B_ja.yaml", "- not a mapping")
        .with("B.yaml", "greeting: root");

    let err = Resolver::new(loader).resolve("B", &ja_jp()).unwrap_err();
    assert!(matches!(err, BundleError::BundleLoadError { .. }));
}

#[test]
fn test_broken_parent_fails_chained_resolution() {
    let loader = MemoryLoader::new()
        .with("B_ja.yaml", "greeting: ja")
        .with("B.yaml", "greeting: [");

    assert!(matches!(
        Resolver::new(loader.clone()).resolve("B", &ja_jp()),
        Err(BundleError::BundleLoadError { .. })
    ));

    let unchained = Resolver::with_options(loader, ResolveOptions::new().with_parent_chain(false));
    let bundle = unchained.resolve("B", &ja_jp()).unwrap();
    assert_eq!(bundle.as_scalar_string("greeting").unwrap(), "ja");
}

#[test]
fn test_loader_io_error_surfaces_immediately() {
    let calls = RefCell::new(0);
    let loader = |_: &str| -> io::Result<Option<Cursor<Vec<u8>>>> {
        *calls.borrow_mut() += 1;
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    };

    let err = resolve("B", &ja_jp(), DEFAULT_FORMATS, &loader).unwrap_err();
    assert!(matches!(err, BundleError::Io(_)));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_not_found() {
    let err = resolve("B", &ja_jp(), DEFAULT_FORMATS, &MemoryLoader::new()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'B'"));
    assert!(msg.contains("ja_JP"));
    assert!(msg.contains("B_ja_JP.yaml"));
}

#[test]
fn test_formats_with_leading_dot() {
    let loader = MemoryLoader::new().with("B.yml", "a: 1");
    let store = resolve("B", &Locale::ROOT, &[".yml"], &loader).unwrap();
    assert_eq!(store.as_scalar_string("a").unwrap(), "1");
}

#[test]
fn test_dir_loader_with_fixtures() {
    let resolver = Resolver::new(DirLoader::new(FIXTURES));
    let bundle = resolver.resolve("messages", &ja_jp()).unwrap();

    assert_eq!(bundle.as_scalar_string("greeting").unwrap(), "こんにちは");
    assert_eq!(bundle.as_scalar_string("fruits.apple").unwrap(), "りんご");
    assert_eq!(bundle.as_scalar_string("fruits.orange").unwrap(), "Orange");
    assert_eq!(
        bundle.as_string_sequence("colors").unwrap(),
        &["Red", "Orange", "Purple"]
    );
    assert!(bundle.keys().contains("farewell"));
}

#[test]
fn test_dir_loader_broken_fixture_is_terminal() {
    let resolver = Resolver::new(DirLoader::new(FIXTURES));
    let err = resolver.resolve_store("broken", &ja_jp()).unwrap_err();
    assert!(err.to_string().contains("broken_ja_JP.yaml"));
}

#[test]
fn test_dir_loader_with_temp_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app_fr.yaml"), "title: Titre").unwrap();
    fs::write(temp_dir.path().join("app.yml"), "title: Title\nfooter: Footer").unwrap();

    let resolver = Resolver::new(DirLoader::new(temp_dir.path()));
    let bundle = resolver.resolve("app", &Locale::parse("fr_CA").unwrap()).unwrap();
    assert_eq!(bundle.as_scalar_string("title").unwrap(), "Titre");
    assert_eq!(bundle.as_scalar_string("footer").unwrap(), "Footer");
    assert_eq!(bundle.chain().count(), 2);
}
