use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use data_error::{MintlistError, Result};

/// JSON descriptor written next to every asset file, following the
/// Metaplex asset-metadata schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub name: String,
    pub description: String,
    pub symbol: String,
    pub seller_fee_basis_points: u16,
    pub image: String,
    pub properties: AssetProperties,
    pub attributes: Vec<AssetAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProperties {
    pub files: Vec<AssetFile>,
    pub category: String,
    pub creators: Vec<CreatorShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFile {
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorShare {
    pub address: String,
    pub share: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAttribute {
    pub trait_type: String,
    pub value: String,
}

/// Constant descriptor fields shared by every asset of a drop. Only the
/// name and the attribute value vary, both derived from the asset's
/// filename stem.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub name_prefix: String,
    pub description: String,
    pub symbol: String,
    pub seller_fee_basis_points: u16,
    pub image: String,
    pub image_type: String,
    pub category: String,
    pub creator: String,
    pub share: u8,
    pub attribute_key: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            name_prefix: "Giveaway Card #".to_owned(),
            description:
                "Exclusive access to future giveaways, airdrops & whitelists!"
                    .to_owned(),
            symbol: "JS".to_owned(),
            seller_fee_basis_points: 1500,
            image: "image.gif".to_owned(),
            image_type: "image/gif".to_owned(),
            category: "image".to_owned(),
            creator: "6k4yQukdKGEtiYaecgHvT7YooN8ZUnhpm5cqVept4Bcw".to_owned(),
            share: 100,
            attribute_key: "attr".to_owned(),
        }
    }
}

impl GeneratorOptions {
    /// The descriptor for the asset with the given filename stem.
    pub fn descriptor(&self, stem: &str) -> AssetDescriptor {
        AssetDescriptor {
            name: format!("{}{}", self.name_prefix, stem),
            description: self.description.clone(),
            symbol: self.symbol.clone(),
            seller_fee_basis_points: self.seller_fee_basis_points,
            image: self.image.clone(),
            properties: AssetProperties {
                files: vec![AssetFile {
                    uri: self.image.clone(),
                    kind: self.image_type.clone(),
                }],
                category: self.category.clone(),
                creators: vec![CreatorShare {
                    address: self.creator.clone(),
                    share: self.share,
                }],
            },
            attributes: vec![AssetAttribute {
                trait_type: self.attribute_key.clone(),
                value: format!("#{}", stem),
            }],
        }
    }
}

/// Writes a `<stem>.json` descriptor into `dir` for every regular file
/// in it, overwriting existing descriptors. The stem is the filename up
/// to the first `.`, so `10.png` yields `10.json` and the attribute
/// value `#10`.
///
/// The run is sequential and any filesystem error aborts it. Re-running
/// on unchanged inputs rewrites identical content. Returns the number of
/// descriptors written.
pub fn generate_descriptors<P: AsRef<Path>>(
    dir: P,
    options: &GeneratorOptions,
) -> Result<usize> {
    let dir = dir.as_ref();

    // Snapshot the listing before writing, so freshly written
    // descriptors never feed back into the same run.
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| MintlistError::Parse)?;
        names.push(name);
    }

    let mut written = 0;
    for name in names {
        let stem = name.split('.').next().unwrap_or(&name);
        let descriptor = options.descriptor(stem);
        let path = dir.join(format!("{}.json", stem));

        log::debug!("writing descriptor {}", path.display());
        fs::write(&path, serde_json::to_vec(&descriptor)?)?;
        written += 1;
    }

    log::info!("wrote {} descriptors to {}", written, dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempdir::TempDir;

    use super::*;

    fn create_assets(dir: &Path, names: &[&str]) {
        for name in names {
            File::create(dir.join(name)).unwrap();
        }
    }

    fn read_descriptor(dir: &Path, name: &str) -> AssetDescriptor {
        let bytes = fs::read(dir.join(name)).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn multi_digit_stems_do_not_reorder_or_mis_split() {
        let dir = TempDir::new("fs_assets_test").unwrap();
        create_assets(dir.path(), &["1.png", "2.png", "10.png"]);

        let written =
            generate_descriptors(dir.path(), &GeneratorOptions::default())
                .unwrap();
        assert_eq!(written, 3);

        for stem in ["1", "2", "10"] {
            let descriptor =
                read_descriptor(dir.path(), &format!("{}.json", stem));
            assert_eq!(descriptor.name, format!("Giveaway Card #{}", stem));
            assert_eq!(descriptor.attributes.len(), 1);
            assert_eq!(descriptor.attributes[0].trait_type, "attr");
            assert_eq!(descriptor.attributes[0].value, format!("#{}", stem));
        }
    }

    #[test]
    fn rerunning_overwrites_with_identical_content() {
        let dir = TempDir::new("fs_assets_test").unwrap();
        create_assets(dir.path(), &["7.png"]);
        let options = GeneratorOptions::default();

        generate_descriptors(dir.path(), &options).unwrap();
        let first = fs::read(dir.path().join("7.json")).unwrap();

        // The second run also picks up 7.json itself; same stem, same
        // descriptor.
        let written = generate_descriptors(dir.path(), &options).unwrap();
        assert_eq!(written, 2);
        let second = fs::read(dir.path().join("7.json")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn directories_are_not_assets() {
        let dir = TempDir::new("fs_assets_test").unwrap();
        fs::create_dir(dir.path().join("nested.dir")).unwrap();
        create_assets(dir.path(), &["3.png"]);

        let written =
            generate_descriptors(dir.path(), &GeneratorOptions::default())
                .unwrap();

        assert_eq!(written, 1);
        assert!(!dir.path().join("nested.json").exists());
    }

    #[test]
    fn descriptor_serializes_with_schema_field_names() {
        let descriptor = GeneratorOptions::default().descriptor("1");
        let value = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(value["seller_fee_basis_points"], 1500);
        assert_eq!(value["properties"]["category"], "image");
        assert_eq!(value["properties"]["files"][0]["type"], "image/gif");
        assert_eq!(value["properties"]["creators"][0]["share"], 100);
        assert_eq!(value["attributes"][0]["trait_type"], "attr");
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = TempDir::new("fs_assets_test").unwrap();
        let gone = dir.path().join("nope");

        assert!(
            generate_descriptors(&gone, &GeneratorOptions::default()).is_err()
        );
    }
}
