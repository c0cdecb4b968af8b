/*!
Databases which persist across analyses.

At present, the only such database is the [activity database](activity), though the [cache manager](crate::engine::CacheManager) of an analyzer also persists across analyses.
*/

pub mod activity;
