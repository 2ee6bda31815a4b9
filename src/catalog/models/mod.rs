pub mod game;
pub mod upstream;

pub use game::{ApiResponse, DatePrecision, GameStatus, NormalizedGame};
pub use upstream::{
    CatalogElement, CatalogNamespace, CatalogResponse, DiscountSetting, FormattedPrice,
    GraphQlError, KeyImage, PageMapping, Price, PromotionalOffer, PromotionalOfferGroup,
    Promotions, Seller, TotalPrice,
};
