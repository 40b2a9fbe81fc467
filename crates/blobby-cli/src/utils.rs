use core::fmt::Display;

use anyhow::Result;
use blobby::scene::{
    examples::{ClusterScene, SingleBlobScene, TripletScene},
    Scene,
};
use clap::ValueEnum;

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    Single,
    #[default]
    Triplet,
    Cluster,
}

impl AvailableScene {
    pub fn insert_into(self, scene: &mut Scene) -> Result<()> {
        match self {
            AvailableScene::Single => SingleBlobScene::insert_into(scene),
            AvailableScene::Triplet => TripletScene::insert_into(scene),
            AvailableScene::Cluster => ClusterScene::insert_into(scene),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("Incorrect format, expected `width`x`height`"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;
        anyhow::ensure!(width > 0 && height > 0, "dimensions must not be null");

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}
