//! In-memory wizard session.
//!
//! [`Session`] is the explicit state store the front end drives: criteria,
//! people, and the current wizard step. Every mutation that can change a
//! person's derived assessment rescores everyone before returning, so the
//! assessments are always a function of the current criteria and ratings.

use serde::Serialize;

use crate::config::{ScoringPolicy, WeightPolicy, ZonemapConfig, NEUTRAL_SCORE};
use crate::core::{Category, Criterion, CriterionId, Error, Person, PersonId, Result, ScoreMap};
use crate::scoring::clamp_score;
use crate::templates::Template;
use crate::weights::CriteriaSet;
use crate::wizard::Step;
use crate::zones::{zone_distribution, Zone};

/// Below this many people the results carry an advisory
pub const RECOMMENDED_MIN_PEOPLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
    pub zone: Zone,
    pub count: usize,
}

/// Summary figures for the results step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub total_people: usize,
    pub distribution: Vec<ZoneCount>,
    pub wife_zone: usize,
    pub danger_zone: usize,
    pub needs_more_people: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    criteria: CriteriaSet,
    people: Vec<Person>,
    step: Step,
    scoring: ScoringPolicy,
    next_person: u64,
}

impl Session {
    pub fn new(weights: WeightPolicy, scoring: ScoringPolicy) -> Self {
        Self {
            criteria: CriteriaSet::new(weights),
            scoring,
            ..Default::default()
        }
    }

    pub fn from_config(config: &ZonemapConfig) -> Self {
        Self::new(config.weight_policy(), config.scoring_policy())
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn scoring_policy(&self) -> &ScoringPolicy {
        &self.scoring
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    /// Look a person up by id, then by case-insensitive name
    pub fn find_person(&self, key: &str) -> Option<&Person> {
        let key = key.trim();
        self.people
            .iter()
            .find(|p| p.id.as_str() == key)
            .or_else(|| self.people.iter().find(|p| p.name.eq_ignore_ascii_case(key)))
    }

    fn rescore(&mut self) {
        let criteria = &self.criteria;
        let scoring = &self.scoring;
        self.people
            .iter_mut()
            .for_each(|person| person.rescore(criteria, scoring));
    }

    // ---- criteria ----

    pub fn add_criterion(&mut self, category: Category, name: &str) -> Option<CriterionId> {
        let id = self.criteria.add_criterion(category, name)?.id.clone();
        self.rescore();
        Some(id)
    }

    pub fn insert_criterion(
        &mut self,
        id: Option<CriterionId>,
        name: &str,
        weight: f64,
        category: Category,
    ) -> Result<CriterionId> {
        let id = self.criteria.insert(id, name, weight, category)?.id.clone();
        self.rescore();
        Ok(id)
    }

    /// Keep generated criterion ids clear of one that is inserted later
    pub fn reserve_criterion_id(&mut self, id: CriterionId) {
        self.criteria.reserve_id(id);
    }

    pub fn update_weight(&mut self, id: &CriterionId, raw_percent: f64) -> bool {
        let updated = self.criteria.update_weight(id, raw_percent);
        if updated {
            self.rescore();
        }
        updated
    }

    /// Remove a criterion. Ratings people hold for it stay in their score
    /// maps but no longer contribute.
    pub fn remove_criterion(&mut self, id: &CriterionId) -> Option<Criterion> {
        let removed = self.criteria.remove_criterion(id);
        if removed.is_some() {
            self.rescore();
        }
        removed
    }

    pub fn normalize(&mut self, category: Category) -> bool {
        let changed = self.criteria.normalize(category);
        if changed {
            self.rescore();
        }
        changed
    }

    pub fn normalize_all(&mut self) {
        for category in Category::ALL {
            self.criteria.normalize(category);
        }
        self.rescore();
    }

    /// Replace both categories with a template's criteria
    pub fn apply_template(&mut self, template: &Template) {
        for category in Category::ALL {
            self.criteria.replace_category(
                category,
                template.criteria(category).iter().map(|c| (c.name, c.weight)),
            );
        }
        log::info!("Applied template '{}'", template.name);
        self.rescore();
    }

    // ---- people ----

    fn fresh_person_id(&mut self) -> PersonId {
        loop {
            self.next_person += 1;
            let id = PersonId::new(format!("person-{}", self.next_person));
            if self.person(&id).is_none() {
                return id;
            }
        }
    }

    /// Add a person rated at the neutral midpoint on every current
    /// criterion. Blank names are ignored.
    pub fn add_person(&mut self, name: &str) -> Option<PersonId> {
        let scores = self
            .criteria
            .iter()
            .map(|c| (c.id.clone(), NEUTRAL_SCORE))
            .collect();
        self.add_person_with_scores(name, scores).ok()
    }

    /// Add a person with explicit ratings, clamped onto the 0-10 scale.
    pub fn add_person_with_scores(&mut self, name: &str, scores: ScoreMap) -> Result<PersonId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidPerson("name must not be empty".to_string()));
        }
        let scores = scores
            .into_iter()
            .map(|(id, score)| (id, clamp_score(score)))
            .collect();
        let id = self.fresh_person_id();
        let person = Person::new(
            id.clone(),
            name.to_string(),
            scores,
            &self.criteria,
            &self.scoring,
        );
        log::debug!("Added {} in {}", person.name, person.zone());
        self.people.push(person);
        Ok(id)
    }

    pub fn update_score(
        &mut self,
        person_id: &PersonId,
        criterion_id: &CriterionId,
        score: f64,
    ) -> Result<()> {
        if self.criteria.get(criterion_id).is_none() {
            return Err(Error::UnknownCriterion(criterion_id.to_string()));
        }
        let person = self
            .people
            .iter_mut()
            .find(|p| &p.id == person_id)
            .ok_or_else(|| Error::UnknownPerson(person_id.to_string()))?;
        person.set_score(criterion_id.clone(), clamp_score(score));
        person.rescore(&self.criteria, &self.scoring);
        Ok(())
    }

    /// Remove a person. Unknown ids are a no-op.
    pub fn remove_person(&mut self, id: &PersonId) -> Option<Person> {
        let index = self.people.iter().position(|p| &p.id == id)?;
        Some(self.people.remove(index))
    }

    // ---- wizard ----

    /// A category is ready when it has criteria whose weights sum to 100%
    pub fn check_category(&self, category: Category) -> Result<()> {
        if self.criteria.criteria(category).is_empty() {
            return Err(Error::NoCriteria { category });
        }
        if !self.criteria.is_valid(category) {
            return Err(Error::InvalidWeights {
                category,
                total: self.criteria.total_weight(category),
            });
        }
        Ok(())
    }

    pub fn validate_weights(&self) -> Result<()> {
        Category::ALL
            .into_iter()
            .try_for_each(|category| self.check_category(category))
    }

    /// Why the wizard cannot move past the current step, if anything
    pub fn can_advance(&self) -> Result<()> {
        match self.step {
            Step::Intro | Step::Templates => Ok(()),
            Step::HotCriteria => self.check_category(Category::Hot),
            Step::CrazyCriteria => self.check_category(Category::Crazy),
            Step::People if self.people.is_empty() => Err(Error::NoPeople),
            Step::People => Ok(()),
            Step::Results => Err(Error::NoNextStep(self.step)),
        }
    }

    pub fn advance(&mut self) -> Result<Step> {
        self.can_advance()?;
        let next = self.step.next().ok_or(Error::NoNextStep(self.step))?;
        log::debug!("Wizard: {} -> {}", self.step, next);
        self.step = next;
        Ok(next)
    }

    /// Step back; stays put on the intro
    pub fn back(&mut self) -> Step {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Drop all criteria and people and return to the intro
    pub fn reset(&mut self) {
        self.criteria.clear();
        self.people.clear();
        self.step = Step::Intro;
    }

    // ---- results ----

    pub fn insights(&self) -> Insights {
        let distribution = zone_distribution(self.people.iter().map(Person::zone))
            .into_iter()
            .map(|(zone, count)| ZoneCount { zone, count })
            .collect();
        let count_in = |zone: Zone| self.people.iter().filter(|p| p.zone() == zone).count();
        Insights {
            total_people: self.people.len(),
            distribution,
            wife_zone: count_in(Zone::WifeZone),
            danger_zone: count_in(Zone::DangerZone),
            needs_more_people: self.people.len() < RECOMMENDED_MIN_PEOPLE,
        }
    }

    /// Resolve people for side-by-side comparison (by id or name)
    pub fn compare<S: AsRef<str>>(&self, keys: &[S]) -> Result<Vec<&Person>> {
        keys.iter()
            .map(|key| {
                self.find_person(key.as_ref())
                    .ok_or_else(|| Error::UnknownPerson(key.as_ref().trim().to_string()))
            })
            .collect()
    }
}
