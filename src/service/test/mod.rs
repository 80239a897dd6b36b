mod api_key;
mod rate_limit;
