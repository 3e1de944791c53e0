use std::path::PathBuf;

use fs_assets::{generate_descriptors, GeneratorOptions};

use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "assets",
    about = "Generate a JSON descriptor for every file in an asset directory"
)]
pub struct Assets {
    #[clap(value_parser, help = "Path to the asset directory")]
    dir: PathBuf,

    #[clap(long, default_value = "Giveaway Card #", help = "Prefix for descriptor names")]
    name_prefix: String,

    #[clap(
        long,
        default_value = "Exclusive access to future giveaways, airdrops & whitelists!",
        help = "Descriptor description"
    )]
    description: String,

    #[clap(long, default_value = "JS", help = "Token symbol")]
    symbol: String,

    #[clap(long, default_value_t = 1500, help = "Royalty in basis points")]
    seller_fee_basis_points: u16,

    #[clap(long, default_value = "image.gif", help = "Shared image filename")]
    image: String,

    #[clap(long, default_value = "image/gif", help = "MIME type of the image")]
    image_type: String,

    #[clap(
        long,
        default_value = "6k4yQukdKGEtiYaecgHvT7YooN8ZUnhpm5cqVept4Bcw",
        help = "Creator address"
    )]
    creator: String,

    #[clap(long, default_value_t = 100, help = "Creator share in percent")]
    share: u8,

    #[clap(long, default_value = "attr", help = "Key of the stem attribute")]
    attribute_key: String,
}

impl Assets {
    pub fn run(&self) -> Result<(), AppError> {
        let options = GeneratorOptions {
            name_prefix: self.name_prefix.clone(),
            description: self.description.clone(),
            symbol: self.symbol.clone(),
            seller_fee_basis_points: self.seller_fee_basis_points,
            image: self.image.clone(),
            image_type: self.image_type.clone(),
            category: "image".to_owned(),
            creator: self.creator.clone(),
            share: self.share,
            attribute_key: self.attribute_key.clone(),
        };

        let written = generate_descriptors(&self.dir, &options)
            .map_err(|e| AppError::AssetsError(e.to_string()))?;

        println!("Wrote {} descriptors to {}", written, self.dir.display());
        Ok(())
    }
}
