use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const MAX_INTENSITY: u32 = 100;

#[derive(Deserialize)]
struct CatalogFile {
    scenes: Vec<SceneEntry>,
}

#[derive(Deserialize)]
struct SceneEntry {
    id: u32,
    label: String,
    title: String,
    category: String,
    intensity: u32,
    icon: String,
    accent: String,
    summary: String,
    analysis: String,
    quote: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=SCENE_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read scene catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse scene catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.scenes.is_empty() {
        panic!("scene catalog {} has no entries", catalog_path.display());
    }

    validate_entries(&catalog.scenes, &catalog_path);

    let mut output = String::new();
    writeln!(&mut output, "pub const SCENES: &[Scene] = &[").unwrap();
    for entry in &catalog.scenes {
        let (r, g, b) = parse_accent(&entry.accent).unwrap_or_else(|| {
            panic!(
                "scene {} has invalid accent '{}' in {}",
                entry.id,
                entry.accent,
                catalog_path.display()
            )
        });
        let icon = icon_variant(&entry.icon).unwrap_or_else(|| {
            panic!(
                "scene {} has unknown icon '{}' in {}",
                entry.id,
                entry.icon,
                catalog_path.display()
            )
        });
        writeln!(&mut output, "    Scene {{").unwrap();
        writeln!(&mut output, "        id: SceneId({}),", entry.id).unwrap();
        writeln!(&mut output, "        label: {},", rust_string(&entry.label)).unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&entry.title)).unwrap();
        writeln!(&mut output, "        category: {},", rust_string(&entry.category)).unwrap();
        writeln!(&mut output, "        intensity: {},", entry.intensity).unwrap();
        writeln!(&mut output, "        icon: IconKind::{icon},").unwrap();
        writeln!(&mut output, "        accent: Rgb::new({r}, {g}, {b}),").unwrap();
        writeln!(&mut output, "        summary: {},", rust_string(&entry.summary)).unwrap();
        writeln!(&mut output, "        analysis: {},", rust_string(&entry.analysis)).unwrap();
        writeln!(&mut output, "        quote: {},", rust_string(&entry.quote)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "const _: () = assert!(!SCENES.is_empty());").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("scene_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("SCENE_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("scenes/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn icon_variant(tag: &str) -> Option<&'static str> {
    match tag.trim() {
        "strength" => Some("Strength"),
        "mortality" => Some("Mortality"),
        "warning" => Some("Warning"),
        "faith" => Some("Faith"),
        "terminal" => Some("Terminal"),
        _ => None,
    }
}

fn parse_accent(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn validate_entries(entries: &[SceneEntry], catalog_path: &Path) {
    let mut ids = HashSet::new();
    let mut last_id = 0u32;

    for entry in entries {
        if entry.id == 0 {
            panic!("scene id must be positive in {}", catalog_path.display());
        }
        if !ids.insert(entry.id) {
            panic!(
                "duplicate scene id {} in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if entry.id <= last_id {
            panic!(
                "scene id {} is out of order (after {}) in {}",
                entry.id,
                last_id,
                catalog_path.display()
            );
        }
        last_id = entry.id;
        if entry.intensity > MAX_INTENSITY {
            panic!(
                "scene {} intensity {} exceeds {MAX_INTENSITY} in {}",
                entry.id,
                entry.intensity,
                catalog_path.display()
            );
        }
        for (field, value) in [
            ("label", &entry.label),
            ("title", &entry.title),
            ("category", &entry.category),
        ] {
            if value.trim().is_empty() {
                panic!(
                    "scene {} {field} cannot be empty in {}",
                    entry.id,
                    catalog_path.display()
                );
            }
        }
    }
}
