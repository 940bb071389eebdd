pub mod series_log;
