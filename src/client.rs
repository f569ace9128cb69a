//! The top-level Twitter API client.

use crate::config::TwitterConfig;
use crate::endpoints::{
    AccountEndpoint, Favorites, Followers, Friends, Geocode, Lists, Search, Statuses, Users,
};
use crate::error::TwitterResult;
use crate::http::HttpClient;

/// A client for the Twitter REST API v1.1.
///
/// The client owns the signed transport; endpoint groups borrow it and are
/// cheap to create on the fly:
///
/// ```no_run
/// # async fn run(client: twitter_v1::TwitterClient) -> twitter_v1::TwitterResult<()> {
/// let me = client.account().verify_credentials(false).await?;
/// let timeline = client
///     .statuses()
///     .home_timeline(&Default::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TwitterClient {
    http: HttpClient,
}

impl TwitterClient {
    /// Create a client from the given configuration.
    pub fn new(config: &TwitterConfig) -> TwitterResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// The **Statuses** endpoint: single tweets and timelines.
    #[must_use]
    pub const fn statuses(&self) -> Statuses<'_> {
        Statuses::new(&self.http)
    }

    /// The **Users** endpoint.
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(&self.http)
    }

    /// The **Search** endpoint.
    #[must_use]
    pub const fn search(&self) -> Search<'_> {
        Search::new(&self.http)
    }

    /// The **Followers** endpoint.
    #[must_use]
    pub const fn followers(&self) -> Followers<'_> {
        Followers::new(&self.http)
    }

    /// The **Friends** endpoint.
    #[must_use]
    pub const fn friends(&self) -> Friends<'_> {
        Friends::new(&self.http)
    }

    /// The **Favorites** endpoint.
    #[must_use]
    pub const fn favorites(&self) -> Favorites<'_> {
        Favorites::new(&self.http)
    }

    /// The **Lists** endpoint.
    #[must_use]
    pub const fn lists(&self) -> Lists<'_> {
        Lists::new(&self.http)
    }

    /// The **Account** endpoint.
    #[must_use]
    pub const fn account(&self) -> AccountEndpoint<'_> {
        AccountEndpoint::new(&self.http)
    }

    /// The **Geo** endpoint.
    #[must_use]
    pub const fn geocode(&self) -> Geocode<'_> {
        Geocode::new(&self.http)
    }
}
