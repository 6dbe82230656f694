mod concurrency_tests;
mod named_ref_tests;
mod round_trip_proptests;
mod value_tests;
