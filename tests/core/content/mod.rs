mod test_loading;
