pub mod banner;
pub mod banner_tag;

pub use banner::{Banner, BannerFields, BannerView, Content, Id as BannerId};

type Id = i32;

pub type FeatureId = Id;
pub type TagId = Id;
