mod api_key_usage;
