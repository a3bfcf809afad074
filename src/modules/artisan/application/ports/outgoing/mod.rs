mod artisan_query;
mod artisan_repository;

pub use artisan_query::{
    ArtisanListFilter, ArtisanOwnerSummary, ArtisanQuery, ArtisanQueryError, ArtisanView,
};
pub use artisan_repository::{
    ArtisanRepository, ArtisanRepositoryError, ArtisanResult, CreateArtisanData,
    UpdateArtisanData,
};
