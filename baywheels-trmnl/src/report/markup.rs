//! TRMNL webhook envelope.
//!
//! The display service takes `{ merge_variables, markup }`: the markup is a
//! Liquid template, filled in on the device side from `merge_variables`. We
//! never render it ourselves, so the `{{ ... }}` placeholders go out as-is.

use serde::Serialize;

use super::Report;

/// Full-screen layout: three counters, station details, title bar.
pub const MARKUP: &str = r#"<div class="layout layout--col gap--large">
  <div class="grid grid--cols-12 gap--medium">
    <!-- Bikes Available -->
    <div class="col col--span-4">
      <div class="item bg--dither-1">
        <div class="meta"></div>
        <div class="content text--center">
          <span class="value value--xxxlarge" data-value-fit="true">{{ bikes_available }}</span>
          <span class="label">Total Bikes</span>
        </div>
      </div>
    </div>

    <!-- eBikes Available -->
    <div class="col col--span-4">
      <div class="item bg--dither-1">
        <div class="meta"></div>
        <div class="content text--center">
          <span class="value value--xxxlarge" data-value-fit="true">{{ ebikes_available }}</span>
          <span class="label">eBikes</span>
        </div>
      </div>
    </div>

    <!-- Docks Available -->
    <div class="col col--span-4">
      <div class="item bg--dither-1">
        <div class="meta"></div>
        <div class="content text--center">
          <span class="value value--xxxlarge" data-value-fit="true">{{ docks_available }}</span>
          <span class="label">Docks Free</span>
        </div>
      </div>
    </div>
  </div>

  <!-- Station Details -->
  <div class="w--full">
    <div class="item">
      <div class="content">
        <div class="label">{{ station_name }}</div>
        <div class="description">Last updated: {{ last_updated }}</div>
      </div>
    </div>
  </div>
</div>

<!-- Title Bar -->
<div class="title_bar">
  <span class="title">BayWheels</span>
  <span class="instance">{{ station_short_name }}</span>
</div>"#;

/// A report wrapped for the display service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub merge_variables: Report,
    pub markup: &'static str,
}

impl Envelope {
    pub fn new(report: Report) -> Self {
        Self {
            merge_variables: report,
            markup: MARKUP,
        }
    }
}
