//! Quote business logic.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::quote::QuoteRepository,
    error::AppError,
    model::{
        message::MessageComponent,
        quote::{CreateQuoteParams, Quote},
    },
};

/// Service implementing quote rules on top of the repository.
pub struct QuoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the active quotes of a channel.
    pub async fn list(&self, channel: &str) -> Result<Vec<Quote>, AppError> {
        QuoteRepository::new(self.db).list(channel).await
    }

    /// Gets a single active quote by its per-channel id.
    ///
    /// # Returns
    /// - `Ok(Quote)` - The active quote
    /// - `Err(AppError::NotFound)` - No active quote with that id
    pub async fn get(&self, channel: &str, quote_id: i64) -> Result<Quote, AppError> {
        QuoteRepository::new(self.db)
            .find(channel, quote_id)
            .await?
            .ok_or_else(|| quote_not_found(channel, quote_id))
    }

    /// Picks a uniformly random active quote of a channel.
    ///
    /// # Returns
    /// - `Ok(Quote)` - A random active quote
    /// - `Err(AppError::NotFound)` - The channel has no active quotes
    pub async fn random(&self, channel: &str) -> Result<Quote, AppError> {
        let mut quotes = QuoteRepository::new(self.db).list(channel).await?;

        if quotes.is_empty() {
            return Err(AppError::NotFound(format!(
                "Channel {:?} has no quotes",
                channel
            )));
        }

        let index = rand::rng().random_range(0..quotes.len());
        Ok(quotes.swap_remove(index))
    }

    /// Creates a new quote, assigning the next per-channel id.
    ///
    /// Ids are sequential from 1 and are never reused, including ids of
    /// soft-deleted quotes. Two concurrent creations in the same channel may
    /// compute the same next id; the unique index then rejects the loser.
    ///
    /// # Arguments
    /// - `param` - Creation parameters (channel, attribution, components)
    ///
    /// # Returns
    /// - `Ok(Quote)` - The stored quote with its assigned id
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateQuoteParams) -> Result<Quote, AppError> {
        let repo = QuoteRepository::new(self.db);
        let quote_id = repo.next_quote_id(&param.channel).await?;
        repo.insert(param, quote_id).await
    }

    /// Replaces the body and/or attribution of a stored quote.
    ///
    /// Fields passed as `None` are left unchanged. Same read-modify-write
    /// caveat as command updates: concurrent edits race, last write wins.
    ///
    /// # Returns
    /// - `Ok(true)` - Exactly one stored record was updated
    /// - `Ok(false)` - The write matched no record
    /// - `Err(AppError::NotFound)` - No active quote with that id
    pub async fn update(
        &self,
        channel: &str,
        quote_id: i64,
        quoted: Option<String>,
        components: Option<Vec<MessageComponent>>,
    ) -> Result<bool, AppError> {
        let repo = QuoteRepository::new(self.db);

        let Some(mut quote) = repo.find(channel, quote_id).await? else {
            return Err(quote_not_found(channel, quote_id));
        };

        if let Some(quoted) = quoted {
            quote.quoted = quoted;
        }
        if let Some(components) = components {
            quote.quote = components;
        }

        let matched = repo.replace(&quote).await?;
        Ok(matched == 1)
    }

    /// Soft-deletes a quote.
    ///
    /// # Returns
    /// - `Ok(())` - Exactly one active record was marked deleted
    /// - `Err(AppError::NotFound)` - No active quote with that id
    pub async fn delete(&self, channel: &str, quote_id: i64) -> Result<(), AppError> {
        let deleted = QuoteRepository::new(self.db)
            .soft_delete(channel, quote_id)
            .await?;

        if deleted {
            Ok(())
        } else {
            Err(quote_not_found(channel, quote_id))
        }
    }
}

fn quote_not_found(channel: &str, quote_id: i64) -> AppError {
    AppError::NotFound(format!(
        "Quote {} not found in channel {:?}",
        quote_id, channel
    ))
}
