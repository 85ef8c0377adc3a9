mod test_paging;
