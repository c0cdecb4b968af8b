/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Logs are compiled out of release builds, so diagnostics (e.g. polynomials which could not be converted to clauses) are only available in development builds.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [gating](crate::procedures::gate)
    pub const GATE: &str = "gate";

    /// Logs related to the [codec](crate::procedures::codec)
    pub const CODEC: &str = "codec";

    /// Logs related to [basis construction](crate::procedures::construction)
    pub const CONSTRUCTION: &str = "construction";

    /// Logs related to [extraction](crate::procedures::extraction)
    pub const EXTRACTION: &str = "extraction";

    /// Logs related to the [engine](crate::engine)
    pub const ENGINE: &str = "engine";

    /// Logs related to the [activity database](crate::db::activity)
    pub const ACTIVITY: &str = "activity";
}
