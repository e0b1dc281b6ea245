pub mod art_movement;
pub mod artist;
pub mod artwork;
pub mod timeline_node;

pub use art_movement::Entity as ArtMovement;
pub use artist::Entity as Artist;
pub use artwork::Entity as Artwork;
pub use timeline_node::Entity as TimelineNode;
