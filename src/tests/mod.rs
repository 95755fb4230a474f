mod lookup_test;
mod output_test;
