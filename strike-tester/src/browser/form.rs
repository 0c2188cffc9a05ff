//! Page object for the booking and confirmation views.
use anyhow::{Context, Result};
use serde_json::Value;
use strike_core::{BookingDraft, CONFIRMATION_KEY, View};
use thirtyfour::prelude::*;

use crate::common::parse_price_label;

const SET_VALUE_JS: &str = "const el = arguments[0]; \
     el.value = arguments[1]; \
     el.dispatchEvent(new Event('input', { bubbles: true }));";

const CLEAR_SLOT_JS: &str = "window.sessionStorage.removeItem(arguments[0]);";

/// Scenarios share one tab, so a booking saved by an earlier run would leak in.
fn clear_slot_args() -> Vec<Value> {
    vec![Value::from(CONFIRMATION_KEY)]
}

pub struct BookingForm<'a> {
    driver: &'a WebDriver,
}

impl<'a> BookingForm<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    /// Load the form with no saved confirmation.
    pub async fn open(&self, base_url: &str) -> Result<()> {
        self.driver
            .goto(base_url)
            .await
            .with_context(|| format!("opening {base_url}"))?;
        self.driver
            .query(By::Css("div.app"))
            .first()
            .await
            .context("app root never rendered")?;
        self.driver
            .execute(CLEAR_SLOT_JS, clear_slot_args())
            .await
            .context("clearing the saved confirmation")?;
        Ok(())
    }

    /// Assign the value directly and fire a bubbling `input` event.
    async fn set_value(&self, id: &str, value: &str) -> Result<()> {
        let element = self
            .driver
            .find(By::Id(id))
            .await
            .with_context(|| format!("missing input #{id}"))?;
        self.driver
            .execute(SET_VALUE_JS, vec![element.to_json()?, Value::from(value)])
            .await?;
        Ok(())
    }

    pub async fn fill(&self, draft: &BookingDraft) -> Result<()> {
        self.set_value("booking-date", &draft.date).await?;
        self.set_value("booking-time", &draft.time).await?;
        self.set_value("booking-people", &draft.people).await?;
        self.set_value("booking-lanes", &draft.lanes).await?;

        for (position, size) in draft.shoes.iter().enumerate() {
            self.driver
                .find(By::Css("button.shoes__button--add"))
                .await
                .context("missing add-shoe button")?
                .click()
                .await?;
            self.set_value(&format!("shoe-{position}"), size).await?;
        }
        Ok(())
    }

    pub async fn submit(&self) -> Result<()> {
        self.driver
            .find(By::Css("button.booking__button"))
            .await
            .context("missing submit button")?
            .click()
            .await?;
        Ok(())
    }

    pub async fn error_message(&self) -> Result<String> {
        let element = self
            .driver
            .query(By::Css("p.error-message"))
            .first()
            .await
            .context("no error message shown")?;
        Ok(element.text().await?)
    }

    pub async fn wait_for_view(&self, view: View) -> Result<()> {
        let selector = format!("div.app.{}", view.class());
        self.driver
            .query(By::Css(selector.as_str()))
            .first()
            .await
            .with_context(|| format!("{view:?} view never shown"))?;
        Ok(())
    }

    pub async fn total_price(&self) -> Result<i64> {
        let total = self
            .driver
            .query(By::Css("span.confirmation__total"))
            .first()
            .await
            .context("no total shown")?;
        parse_price_label(&total.text().await?)
    }

    pub async fn page_text(&self) -> Result<String> {
        Ok(self.driver.find(By::Css("div.app")).await?.text().await?)
    }

    /// Open the hamburger menu and follow the link to `view`.
    pub async fn navigate(&self, view: View) -> Result<()> {
        self.driver
            .find(By::Css("img.navigation__icon"))
            .await
            .context("missing navigation icon")?
            .click()
            .await?;
        self.driver
            .query(By::LinkText(view.label()))
            .first()
            .await
            .with_context(|| format!("no navigation link to {view:?}"))?
            .click()
            .await?;
        self.wait_for_view(view).await
    }
}
