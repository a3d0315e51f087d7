//! Detail Logic
//!
//! Loads one record with its ability texts and (capped) move types.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{try_join, try_join_all};

use crate::api::{PokeApi, Transport};
use crate::error::{FetchError, FetchResult};
use crate::models::{AbilityDescription, ItemDetail, MoveSummary, NamedResource};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Ready(ItemDetail),
    Failed(FetchError),
}

impl From<FetchResult<ItemDetail>> for DetailState {
    fn from(result: FetchResult<ItemDetail>) -> Self {
        match result {
            Ok(detail) => DetailState::Ready(detail),
            Err(err) => DetailState::Failed(err),
        }
    }
}

pub async fn load_detail<T: Transport>(api: &PokeApi<T>, name: &str) -> FetchResult<ItemDetail> {
    let config = api.config();
    let record = api.pokemon(name).await?;

    let abilities = try_join_all(
        record
            .abilities
            .iter()
            .map(|slot| resolve_ability(api, &slot.ability, &config.language)),
    );
    let moves = try_join_all(
        record
            .moves
            .iter()
            .take(config.move_limit)
            .map(|slot| resolve_move(api, &slot.move_ref)),
    );
    let (abilities, moves) = try_join(abilities, moves).await?;

    Ok(ItemDetail {
        id: record.id,
        name: record.name.clone(),
        image_url: record.sprites.best().map(str::to_string),
        categories: record.type_names(),
        abilities,
        moves,
    })
}

async fn resolve_ability<T: Transport>(
    api: &PokeApi<T>,
    ability: &NamedResource,
    language: &str,
) -> FetchResult<AbilityDescription> {
    let record = api.ability(&ability.url).await.map_err(FetchError::linked)?;
    Ok(AbilityDescription {
        name: ability.name.clone(),
        effect_text: record.effect_in(language).map(str::to_string),
    })
}

async fn resolve_move<T: Transport>(api: &PokeApi<T>, move_ref: &NamedResource) -> FetchResult<MoveSummary> {
    let record = api.move_detail(&move_ref.url).await.map_err(FetchError::linked)?;
    Ok(MoveSummary {
        name: move_ref.name.clone(),
        category: record.type_ref.name,
    })
}

/// Runs `load_detail`, yielding `None` when a newer ticket was issued meanwhile
pub async fn load_for_ticket<T: Transport>(
    api: &PokeApi<T>,
    name: &str,
    guard: &LoadGuard,
    ticket: Ticket,
) -> Option<FetchResult<ItemDetail>> {
    let result = load_detail(api, name).await;
    guard.is_current(ticket).then_some(result)
}

/// Identifies one issued load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter; only the latest ticket may publish its response
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    generation: Arc<AtomicU64>,
}

impl LoadGuard {
    pub fn issue(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}
