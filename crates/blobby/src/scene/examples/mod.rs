mod cluster;
mod single;
mod triplet;

pub use cluster::ClusterScene;
pub use single::SingleBlobScene;
pub use triplet::TripletScene;
