//! Criterion weight management.
//!
//! [`CriteriaSet`] owns the criteria of both categories and maintains the
//! weight invariants: weights are non-negative, updates are clamped into the
//! policy's bounds, and each category can be rescaled to sum to 1.0.
//!
//! A category is "valid for proceeding" when its weights sum to 1.0 within
//! [`WEIGHT_SUM_TOLERANCE`], inclusive at both ends.

use std::collections::BTreeSet;

use crate::config::{InsertPolicy, WeightPolicy};
use crate::core::{Category, Criterion, CriterionId, Error, Result};

/// Absolute tolerance around 1.0 for a category's weight sum
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

// Decimal weights like 0.99 or 0.33 are not exact in binary; without this
// slack a sum of exactly 0.99 would land a hair outside the tolerance.
const SUM_ROUNDING_SLACK: f64 = 1e-9;

/// Whether a weight sum counts as 100%
pub fn is_valid_sum(sum: f64) -> bool {
    (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE + SUM_ROUNDING_SLACK
}

/// Criteria for both categories, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CriteriaSet {
    hot: Vec<Criterion>,
    crazy: Vec<Criterion>,
    policy: WeightPolicy,
    next_id: u64,
    reserved: BTreeSet<CriterionId>,
}

impl CriteriaSet {
    pub fn new(policy: WeightPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> &WeightPolicy {
        &self.policy
    }

    pub fn criteria(&self, category: Category) -> &[Criterion] {
        match category {
            Category::Hot => &self.hot,
            Category::Crazy => &self.crazy,
        }
    }

    fn criteria_mut(&mut self, category: Category) -> &mut Vec<Criterion> {
        match category {
            Category::Hot => &mut self.hot,
            Category::Crazy => &mut self.crazy,
        }
    }

    /// All criteria, hot first
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.hot.iter().chain(self.crazy.iter())
    }

    pub fn len(&self) -> usize {
        self.hot.len() + self.crazy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hot.is_empty() && self.crazy.is_empty()
    }

    pub fn get(&self, id: &CriterionId) -> Option<&Criterion> {
        self.iter().find(|c| &c.id == id)
    }

    fn get_mut(&mut self, id: &CriterionId) -> Option<&mut Criterion> {
        self.hot
            .iter_mut()
            .chain(self.crazy.iter_mut())
            .find(|c| &c.id == id)
    }

    /// Find a criterion by name, ignoring case and surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&Criterion> {
        let wanted = name.trim();
        self.iter().find(|c| c.name.eq_ignore_ascii_case(wanted))
    }

    pub fn total_weight(&self, category: Category) -> f64 {
        self.criteria(category).iter().map(|c| c.weight).sum()
    }

    pub fn is_valid(&self, category: Category) -> bool {
        is_valid_sum(self.total_weight(category))
    }

    /// Keep generated ids clear of an id that will be inserted later
    pub fn reserve_id(&mut self, id: CriterionId) {
        self.reserved.insert(id);
    }

    /// Generate an id of the form `<category>-<n>` not used by any criterion
    /// and not reserved
    fn fresh_id(&mut self, category: Category) -> CriterionId {
        loop {
            self.next_id += 1;
            let id = CriterionId::new(format!("{}-{}", category.key(), self.next_id));
            if self.get(&id).is_none() && !self.reserved.contains(&id) {
                return id;
            }
        }
    }

    /// Add a criterion by name.
    ///
    /// Returns `None` and leaves the set untouched when the trimmed name is
    /// empty. Under [`InsertPolicy::EqualSplit`] every criterion in the
    /// category is reset to an equal share.
    pub fn add_criterion(&mut self, category: Category, name: &str) -> Option<&Criterion> {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("Ignoring {} criterion with empty name", category.key());
            return None;
        }

        let weight = match self.policy.insert_policy {
            InsertPolicy::Fixed => self.policy.default_weight,
            InsertPolicy::EqualSplit => 1.0 / (self.criteria(category).len() + 1) as f64,
        };
        let id = self.fresh_id(category);
        let criteria = self.criteria_mut(category);
        criteria.push(Criterion {
            id,
            name: name.to_string(),
            weight,
            category,
        });

        if self.policy.insert_policy == InsertPolicy::EqualSplit {
            self.criteria_mut(category)
                .iter_mut()
                .for_each(|c| c.weight = weight);
        }

        self.criteria(category).last()
    }

    /// Insert a fully specified criterion, e.g. from a session document.
    ///
    /// A missing id is generated. Weights are taken as given (not clamped)
    /// but must be finite and non-negative.
    pub fn insert(
        &mut self,
        id: Option<CriterionId>,
        name: &str,
        weight: f64,
        category: Category,
    ) -> Result<&Criterion> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_criterion(name, "name must not be empty"));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::invalid_criterion(
                name,
                format!("weight must be a non-negative number, got {weight}"),
            ));
        }
        let id = match id {
            Some(id) if self.get(&id).is_some() => {
                return Err(Error::DuplicateCriterion(id.to_string()))
            }
            Some(id) => id,
            None => self.fresh_id(category),
        };

        let criteria = self.criteria_mut(category);
        criteria.push(Criterion {
            id,
            name: name.to_string(),
            weight,
            category,
        });
        self.criteria(category)
            .last()
            .ok_or_else(|| Error::invalid_criterion(name, "insert failed"))
    }

    /// Set a criterion's weight from a percentage, clamped to the policy
    /// bounds. Returns false for an unknown id.
    pub fn update_weight(&mut self, id: &CriterionId, raw_percent: f64) -> bool {
        let weight = self.policy.clamp_percent(raw_percent);
        match self.get_mut(id) {
            Some(criterion) => {
                criterion.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Remove a criterion. Unknown ids are a no-op.
    pub fn remove_criterion(&mut self, id: &CriterionId) -> Option<Criterion> {
        Category::ALL.into_iter().find_map(|category| {
            let criteria = self.criteria_mut(category);
            criteria
                .iter()
                .position(|c| &c.id == id)
                .map(|index| criteria.remove(index))
        })
    }

    /// Rescale a category so its weights sum to 1.0.
    ///
    /// A zero total leaves the weights untouched and returns false.
    pub fn normalize(&mut self, category: Category) -> bool {
        let total = self.total_weight(category);
        if total == 0.0 {
            log::debug!(
                "Skipping normalization of {} criteria: zero total weight",
                category.key()
            );
            return false;
        }
        self.criteria_mut(category)
            .iter_mut()
            .for_each(|c| c.weight /= total);
        true
    }

    /// Replace a category's criteria with fresh ones, as when loading a
    /// template. Weights are taken as given.
    pub fn replace_category<'a>(
        &mut self,
        category: Category,
        entries: impl IntoIterator<Item = (&'a str, f64)>,
    ) {
        self.criteria_mut(category).clear();
        for (name, weight) in entries {
            let id = self.fresh_id(category);
            self.criteria_mut(category).push(Criterion {
                id,
                name: name.trim().to_string(),
                weight: weight.max(0.0),
                category,
            });
        }
    }

    pub fn clear(&mut self) {
        self.hot.clear();
        self.crazy.clear();
    }
}
