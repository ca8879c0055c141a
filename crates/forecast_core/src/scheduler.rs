//! EventScheduler (L1): expands an event's (start, end, frequency) triple
//! into the explicit ascending list of occurrence months §4.2 defines.

use crate::calendar::Month;
use crate::error::ConfigError;
use crate::model::Event;

/// Expand `event` into its ascending occurrence list.
///
/// `simulation_start`/`terminal_month` supply the defaults for a missing
/// `start_date`/`end_date`. `allow_missing_frequency` is true only for
/// investment contribution/withdrawal events (§4.2): when true, a `None`
/// frequency normalizes to 1 instead of raising `ConfigError`.
pub fn schedule_occurrences(
    event: &Event,
    simulation_start: Month,
    terminal_month: Month,
    allow_missing_frequency: bool,
) -> Result<Vec<Month>, ConfigError> {
    let start = event.start_date.unwrap_or(simulation_start);
    let end = event.end_date.unwrap_or(terminal_month);

    let frequency = match event.frequency {
        Some(f) if f >= 1 => f,
        Some(f) => {
            return Err(ConfigError::NonPositiveFrequency {
                context: format!("event {:?}", event.name),
                frequency: f,
            });
        }
        None if allow_missing_frequency => 1,
        None => {
            return Err(ConfigError::NonPositiveFrequency {
                context: format!("event {:?}", event.name),
                frequency: 0,
            });
        }
    };

    if start == end {
        return Ok(vec![start]);
    }

    let mut occurrences = Vec::new();
    let mut k: i32 = 0;
    loop {
        let candidate = start.offset(k * frequency);
        if candidate > end {
            break;
        }
        occurrences.push(candidate);
        k += 1;
    }
    Ok(occurrences)
}

/// Schedule `event` in place, populating `event.occurrences`.
pub fn schedule_event_in_place(
    event: &mut Event,
    simulation_start: Month,
    terminal_month: Month,
    allow_missing_frequency: bool,
) -> Result<(), ConfigError> {
    event.occurrences = schedule_occurrences(
        event,
        simulation_start,
        terminal_month,
        allow_missing_frequency,
    )?;
    Ok(())
}
