use std::sync::Arc;

use tracing::debug;

use crate::error::{FormulaError, Result};
use crate::formula::{compute_summary, COPY_SUFFIX};
use crate::models::{FormulaSummary, Ingredient, IngredientId, IngredientPatch};

/// Owns the ordered ingredient list of one formula.
///
/// Every mutation publishes a fresh list; snapshots handed out earlier keep
/// the contents they had. The list never becomes empty.
#[derive(Debug, Clone)]
pub struct IngredientStore {
    ingredients: Arc<[Ingredient]>,
    next_id: u64,
    revision: u64,
}

impl Default for IngredientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientStore {
    /// Create a store holding a single blank ingredient.
    pub fn new() -> Self {
        let first = Ingredient::blank(IngredientId(1));
        Self {
            ingredients: Arc::from(vec![first]),
            next_id: 2,
            revision: 0,
        }
    }

    /// Restore a store from previously saved ingredients.
    ///
    /// Rejects an empty list, repeated ids, and units foreign to their
    /// measurement system. New ids continue after the largest loaded id.
    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Result<Self> {
        if ingredients.is_empty() {
            return Err(FormulaError::EmptyFormula);
        }

        let mut ids: Vec<u64> = ingredients.iter().map(|i| i.id.0).collect();
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(FormulaError::DuplicateId(pair[0]));
        }

        if let Some(bad) = ingredients.iter().find(|i| !i.has_consistent_unit()) {
            return Err(FormulaError::InvalidInput(format!(
                "unit '{}' is not a {} unit (ingredient {})",
                bad.unit, bad.measurement_system, bad.id
            )));
        }

        let max_id = ids.last().copied().unwrap_or(0);
        let next_id = max_id.checked_add(1).ok_or_else(|| {
            FormulaError::InvalidInput(format!(
                "ingredient id {} leaves no room for new ids",
                max_id
            ))
        })?;

        Ok(Self {
            ingredients: Arc::from(ingredients),
            next_id,
            revision: 0,
        })
    }

    /// Next unused id. Once the counter is spent, the smallest id not held by
    /// a current ingredient is used instead.
    fn fresh_id(&mut self) -> IngredientId {
        if let Some(after) = self.next_id.checked_add(1) {
            let id = IngredientId(self.next_id);
            self.next_id = after;
            return id;
        }

        let mut candidate = 0;
        while self.position(IngredientId(candidate)).is_some() {
            candidate += 1;
        }
        IngredientId(candidate)
    }

    fn publish(&mut self, next: Vec<Ingredient>) {
        self.ingredients = Arc::from(next);
        self.revision += 1;
    }

    fn position(&self, id: IngredientId) -> Option<usize> {
        self.ingredients.iter().position(|i| i.id == id)
    }

    /// Append a blank ingredient and return its id.
    pub fn add(&mut self) -> IngredientId {
        let id = self.fresh_id();
        let mut next = self.ingredients.to_vec();
        next.push(Ingredient::blank(id));
        self.publish(next);
        debug!(%id, len = self.len(), "added ingredient");
        id
    }

    /// Merge `patch` over the ingredient with `id`, in place in the order.
    ///
    /// Unknown ids are ignored. Returns whether a record was replaced.
    pub fn update(&mut self, id: IngredientId, patch: &IngredientPatch) -> bool {
        let Some(pos) = self.position(id) else {
            debug!(%id, "update ignored: unknown ingredient");
            return false;
        };

        let mut next = self.ingredients.to_vec();
        next[pos] = patch.apply(&next[pos]);
        self.publish(next);
        debug!(%id, ?patch, "updated ingredient");
        true
    }

    /// Remove the ingredient with `id` unless it is the last one left.
    ///
    /// Returns whether a record was removed.
    pub fn remove(&mut self, id: IngredientId) -> bool {
        if !self.can_remove() {
            debug!(%id, "remove ignored: last ingredient");
            return false;
        }
        let Some(pos) = self.position(id) else {
            debug!(%id, "remove ignored: unknown ingredient");
            return false;
        };

        let mut next = self.ingredients.to_vec();
        next.remove(pos);
        self.publish(next);
        debug!(%id, len = self.len(), "removed ingredient");
        true
    }

    /// Append a copy of the ingredient with `id` under a fresh id, its name
    /// suffixed with " (copy)". Returns the new id, or `None` for unknown ids.
    pub fn duplicate(&mut self, id: IngredientId) -> Option<IngredientId> {
        let Some(pos) = self.position(id) else {
            debug!(%id, "duplicate ignored: unknown ingredient");
            return None;
        };

        let new_id = self.fresh_id();
        let mut copy = self.ingredients[pos].clone();
        copy.id = new_id;
        copy.name.push_str(COPY_SUFFIX);

        let mut next = self.ingredients.to_vec();
        next.push(copy);
        self.publish(next);
        debug!(source = %id, %new_id, "duplicated ingredient");
        Some(new_id)
    }

    /// Percentage summary of the current ingredients, if any row is valid.
    pub fn compute_summary(&self) -> Option<FormulaSummary> {
        compute_summary(&self.ingredients)
    }

    pub fn get(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Look up an ingredient, failing with `IngredientNotFound`.
    pub fn require(&self, id: IngredientId) -> Result<&Ingredient> {
        self.get(id)
            .ok_or_else(|| FormulaError::IngredientNotFound(id.to_string()))
    }

    /// Ingredients in display order.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Shared view of the current list. Unaffected by later mutations.
    pub fn snapshot(&self) -> Arc<[Ingredient]> {
        Arc::clone(&self.ingredients)
    }

    /// Counter bumped by every applied mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a remove would currently take effect.
    pub fn can_remove(&self) -> bool {
        self.ingredients.len() > 1
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
